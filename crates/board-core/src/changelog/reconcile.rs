//! Reconciliation of an audit row with its joined context
//!
//! Rules:
//! - the table name picks exactly one payload shape; a supplied context of any
//!   other shape is a [`MappingError::ContextMismatch`]
//! - unknown tables fall back to a bare entry and raise an
//!   [`UnknownTableWarning`] notice instead of an error
//! - `users` rows never carry a project name
//! - other project-scoped rows need one unless the project was deleted
//!
//! Nothing here logs; callers decide what to do with the returned notices.

use std::fmt;

use super::{AuditRow, AuditedTable, ChangeLogEntry, EnrichmentContext, EntryKind, ProjectScope};
use crate::error::MappingError;
use crate::value_objects::RecordId;

/// Non-fatal: the row's table is not in the known mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTableWarning {
    pub row_id: RecordId,
    pub table_name: String,
    /// Kind of the context that was supplied and ignored, if any
    pub ignored_context: Option<EntryKind>,
}

impl fmt::Display for UnknownTableWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} references unknown table `{}`",
            self.row_id, self.table_name
        )
    }
}

/// Something worth reporting that did not stop the entry from being built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentNotice {
    UnknownTable(UnknownTableWarning),
    /// Table has a payload shape but no context was supplied
    MissingContext { row_id: RecordId, table: AuditedTable },
    /// A project name was supplied for a row that is not project-scoped
    ProjectNameDropped { row_id: RecordId },
}

/// A built entry plus the notices raised while building it
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub entry: ChangeLogEntry,
    pub notices: Vec<EnrichmentNotice>,
}

/// Build a feed entry from a row, its optional context, and its project scope
pub fn reconcile(
    row: AuditRow,
    context: Option<EnrichmentContext>,
    project: ProjectScope,
) -> Result<Reconciled, MappingError> {
    let mut notices = Vec::new();

    let Some(table) = row.table() else {
        notices.push(EnrichmentNotice::UnknownTable(UnknownTableWarning {
            row_id: row.id.clone(),
            table_name: row.table_name.clone(),
            ignored_context: context.as_ref().map(EnrichmentContext::kind),
        }));
        let project_name = match project {
            ProjectScope::Resolved(name) => Some(name),
            ProjectScope::Deleted | ProjectScope::Unresolved => None,
        };
        return Ok(Reconciled {
            entry: ChangeLogEntry::new(row, None, project_name),
            notices,
        });
    };

    let expected = table.entry_kind();
    let details = match context {
        Some(ctx) if ctx.kind() == expected => Some(ctx),
        Some(ctx) => {
            return Err(MappingError::ContextMismatch {
                row_id: row.id,
                table: row.table_name,
                expected,
                found: ctx.kind(),
            });
        }
        None => {
            if expected != EntryKind::Bare {
                notices.push(EnrichmentNotice::MissingContext {
                    row_id: row.id.clone(),
                    table,
                });
            }
            None
        }
    };

    let project_name = match project {
        ProjectScope::Resolved(_) if table == AuditedTable::Users => {
            notices.push(EnrichmentNotice::ProjectNameDropped {
                row_id: row.id.clone(),
            });
            None
        }
        ProjectScope::Resolved(name) => Some(name),
        ProjectScope::Deleted => None,
        ProjectScope::Unresolved if table.requires_project_name() => {
            return Err(MappingError::MissingProjectName {
                row_id: row.id,
                table: row.table_name,
            });
        }
        ProjectScope::Unresolved => None,
    };

    Ok(Reconciled {
        entry: ChangeLogEntry::new(row, details, project_name),
        notices,
    })
}
