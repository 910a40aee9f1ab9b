//! Hydration Tracker Shared Library
//!
//! Domain model and derived analytics for hydration tracking: the drink
//! source catalog, daily and weekly aggregation, hydration status
//! classification, insight generation and feature-state composition.
//! Everything here is a pure function over immutable values, shared by the
//! service and WASM crates.

pub mod daily;
pub mod errors;
pub mod goals;
pub mod insights;
pub mod models;
pub mod sources;
pub mod state;
pub mod status;
pub mod types;
pub mod validation;
pub mod weekly;

// Re-export commonly used items
pub use daily::{summarize_day, DailySummary};
pub use errors::*;
pub use goals::{recommended_goal_ml, ActivityLevel};
pub use insights::{generate_insights, Insight, InsightConfig, InsightInput, InsightType};
pub use models::{Entry, EntryRecord, GlassSize, Settings};
pub use sources::{SourceInfo, SourceKind};
pub use state::{FeatureParts, FeatureState, UiEvent, UiFlags};
pub use status::{classify_status, HydrationStatus};
pub use weekly::{fill_week, summarize_week, WeeklyStats};
