//! Activity feed model
//!
//! Raw [`AuditRow`]s are joined with an [`EnrichmentContext`] and a
//! [`ProjectScope`] by [`reconcile`] to produce a [`ChangeLogEntry`].

mod audit_row;
mod context;
mod entry;
mod feed;
mod reconcile;
mod table;

pub use audit_row::{AuditRow, Operation};
pub use context::{
    AssignmentDetails, CommentDetails, EnrichmentContext, FileDetails, MilestoneDetails,
    ProjectMemberDetails, TaskDetails, TaskLabelDetails, UserDetails,
};
pub use entry::{ChangeLogEntry, ProjectScope, UNKNOWN_PROJECT_LABEL};
pub use feed::{sort_feed, sort_records, FeedRecord};
pub use reconcile::{reconcile, EnrichmentNotice, Reconciled, UnknownTableWarning};
pub use table::{AuditedTable, EntryKind};
