//! # board-core
//!
//! Domain layer for the project board: entities, value objects, the audit
//! change-log model with its reconciliation rules, declarative record schemas,
//! and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod changelog;
pub mod entities;
pub mod error;
pub mod schema;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use changelog::{
    reconcile, sort_feed, sort_records, AuditRow, AuditedTable, ChangeLogEntry, EnrichmentContext,
    EnrichmentNotice, EntryKind, FeedRecord, Operation, ProjectScope, Reconciled,
    UnknownTableWarning, UNKNOWN_PROJECT_LABEL,
};
pub use entities::{Label, Milestone, ProjectFile, User};
pub use error::{DomainError, FieldViolation, MappingError, ValidationError, ViolationKind};
pub use schema::Schema;
pub use traits::{ChangeLogSource, RepoResult};
pub use value_objects::{RecordId, TaskCounts};
