//! Error types for the Hydration Tracker domain

use thiserror::Error;

/// Domain error types
///
/// Every variant is returned synchronously to the immediate caller. Nothing
/// in this crate retries or swallows an error, and invalid input is never
/// coerced into a valid-looking value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HydrationError {
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Unknown source kind: {0}")]
    UnknownSourceKind(String),

    #[error("Invalid week: {0}")]
    InvalidWeek(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

impl HydrationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            HydrationError::InvalidEntry(_) => "INVALID_ENTRY",
            HydrationError::InsufficientData(_) => "INSUFFICIENT_DATA",
            HydrationError::UnknownSourceKind(_) => "UNKNOWN_SOURCE_KIND",
            HydrationError::InvalidWeek(_) => "INVALID_WEEK",
            HydrationError::InvalidSettings(_) => "INVALID_SETTINGS",
            HydrationError::InvalidProfile(_) => "INVALID_PROFILE",
        }
    }
}

/// Result type alias for domain operations
pub type HydrationResult<T> = Result<T, HydrationError>;
