//! Hydration Tracker Service Library
//!
//! Wires the pure aggregators from `hydration-tracker-shared` to storage,
//! a clock and configuration, and exposes the feature-level operations a
//! presentation layer drives.

pub mod clock;
pub mod config;
pub mod error;
pub mod repositories;
pub mod services;
pub mod telemetry;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use error::{ServiceError, ServiceResult};
pub use repositories::{HydrationRepository, InMemoryRepository};
pub use services::{HydrationTracker, Intent};
