//! Mapping errors - an audit row and its joined context disagree
//!
//! These point at an upstream data-consistency bug rather than bad user input.

use thiserror::Error;

use crate::changelog::EntryKind;
use crate::value_objects::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("row {row_id} from `{table}` expects {expected} context, got {found}")]
    ContextMismatch {
        row_id: RecordId,
        table: String,
        expected: EntryKind,
        found: EntryKind,
    },

    #[error("row {row_id} from project-scoped table `{table}` has no project name")]
    MissingProjectName { row_id: RecordId, table: String },
}

impl MappingError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ContextMismatch { .. } => "CONTEXT_MISMATCH",
            Self::MissingProjectName { .. } => "MISSING_PROJECT_NAME",
        }
    }

    /// ID of the audit row that failed to map
    pub fn row_id(&self) -> &RecordId {
        match self {
            Self::ContextMismatch { row_id, .. } | Self::MissingProjectName { row_id, .. } => row_id,
        }
    }
}
