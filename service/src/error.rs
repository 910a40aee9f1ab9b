//! Service error handling
//!
//! Domain errors from the shared crate pass through unchanged; storage and
//! configuration failures are wrapped so callers see one error type.

use hydration_tracker_shared::types::ErrorResponse;
use hydration_tracker_shared::HydrationError;
use thiserror::Error;

/// Service error type
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] HydrationError),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ServiceError {
    /// Stable machine-readable code for the presentation layer
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Domain(e) => e.code(),
            ServiceError::Storage(_) => "STORAGE_ERROR",
            ServiceError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Error body for the presentation layer
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.code(), self.to_string())
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_is_transparent() {
        let error = ServiceError::from(HydrationError::InvalidEntry("Amount: must be greater than 0".to_string()));
        assert_eq!(error.to_string(), "Invalid entry: Amount: must be greater than 0");
        assert_eq!(error.code(), "INVALID_ENTRY");
    }

    #[test]
    fn test_storage_error_code() {
        let error = ServiceError::from(anyhow::anyhow!("disk full"));
        assert_eq!(error.code(), "STORAGE_ERROR");
        assert_eq!(error.to_string(), "Storage error: disk full");
    }

    #[test]
    fn test_insufficient_data_code() {
        let error = ServiceError::from(HydrationError::InsufficientData("no days".to_string()));
        assert_eq!(error.code(), "INSUFFICIENT_DATA");
        assert_eq!(error.to_response().error.code, "INSUFFICIENT_DATA");
    }
}
