//! Domain errors - error types for the domain layer

use thiserror::Error;

use super::{MappingError, ValidationError};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Completed task count {completed} exceeds total {all}")]
    InvalidTaskCounts { all: u64, completed: u64 },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    // =========================================================================
    // Mapping Errors
    // =========================================================================
    #[error(transparent)]
    Mapping(#[from] MappingError),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Data source error: {0}")]
    DataSourceError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidTaskCounts { .. } => "INVALID_TASK_COUNTS",
            Self::UnknownOperation(_) => "UNKNOWN_OPERATION",

            // Mapping
            Self::Mapping(e) => e.code(),

            // Infrastructure
            Self::DataSourceError(_) => "DATA_SOURCE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidTaskCounts { .. } | Self::UnknownOperation(_)
        )
    }

    /// Check if this is a mapping error (upstream data inconsistency)
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }
}
