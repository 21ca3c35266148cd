//! Feed service
//!
//! Assembles a project's activity feed from the change-log source.

use board_core::{sort_feed, FeedRecord, FieldViolation, RecordId, ValidationError};
use tracing::{error, info, instrument};

use crate::dto::FeedResponse;

use super::context::ServiceContext;
use super::enricher::LogEnricher;
use super::error::ServiceResult;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
    enricher: LogEnricher,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            enricher: LogEnricher::new(),
        }
    }

    /// Newest-first feed for one project, capped at the configured page size
    #[instrument(skip_all, fields(project_id = %project_id))]
    pub async fn project_feed(&self, project_id: &RecordId) -> ServiceResult<FeedResponse> {
        if project_id.as_str().trim().is_empty() {
            return Err(ValidationError::from(FieldViolation::missing("project_id")).into());
        }

        let config = self.ctx.feed_config();
        // One extra row tells whether older entries exist past the page
        let records = self
            .ctx
            .change_log()
            .fetch_project_feed(project_id, config.max_entries.saturating_add(1))
            .await?;
        let truncated = records.len() > config.max_entries;

        let mut entries = Vec::with_capacity(records.len());
        let mut skipped = 0;

        for FeedRecord {
            row,
            context,
            project,
        } in records
        {
            match self.enricher.enrich(row, context, project) {
                Ok(entry) => entries.push(entry),
                Err(e) if config.skip_malformed => {
                    error!(
                        row_id = %e.row_id(),
                        code = e.code(),
                        error = %e,
                        "Dropping feed row that failed to map"
                    );
                    skipped += 1;
                }
                Err(e) => {
                    error!(row_id = %e.row_id(), code = e.code(), error = %e, "Feed mapping failed");
                    return Err(e.into());
                }
            }
        }

        sort_feed(&mut entries);
        entries.truncate(config.max_entries);

        info!(
            entries = entries.len(),
            skipped,
            truncated,
            "Project feed assembled"
        );

        Ok(FeedResponse {
            project_id: project_id.clone(),
            entries,
            skipped,
            truncated,
        })
    }
}
