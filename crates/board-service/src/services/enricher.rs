//! Log enricher
//!
//! Wraps [`board_core::reconcile`] and reports its notices through `tracing`.

use board_core::{
    reconcile, AuditRow, ChangeLogEntry, EnrichmentContext, EnrichmentNotice, MappingError,
    ProjectScope,
};
use tracing::{debug, instrument, warn};

/// Turns audit rows into feed entries
///
/// Stateless; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEnricher;

impl LogEnricher {
    pub fn new() -> Self {
        Self
    }

    /// Attach the row's context and project name, enforcing the mapping rules
    #[instrument(level = "debug", skip_all, fields(row_id = %row.id, table = %row.table_name))]
    pub fn enrich(
        &self,
        row: AuditRow,
        context: Option<EnrichmentContext>,
        project: ProjectScope,
    ) -> Result<ChangeLogEntry, MappingError> {
        let reconciled = reconcile(row, context, project)?;

        for notice in &reconciled.notices {
            match notice {
                EnrichmentNotice::UnknownTable(warning) => warn!(
                    row_id = %warning.row_id,
                    table = %warning.table_name,
                    ignored_context = ?warning.ignored_context,
                    "Unknown table, falling back to bare entry"
                ),
                EnrichmentNotice::MissingContext { row_id, table } => debug!(
                    row_id = %row_id,
                    table = %table,
                    "No context supplied, entry left bare"
                ),
                EnrichmentNotice::ProjectNameDropped { row_id } => debug!(
                    row_id = %row_id,
                    "Project name dropped from user row"
                ),
            }
        }

        Ok(reconciled.entry)
    }
}
