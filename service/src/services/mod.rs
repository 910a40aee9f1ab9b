//! Business logic services
//!
//! Services coordinate the repository with the pure aggregators in the
//! shared crate.

pub mod tracker;

pub use tracker::{HydrationTracker, Intent};
