//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use board_core::{ChangeLogEntry, RecordId};
use serde::Serialize;

/// One page of a project's activity feed, newest first
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub project_id: RecordId,
    pub entries: Vec<ChangeLogEntry>,
    /// Rows dropped because they could not be mapped
    pub skipped: usize,
    /// More entries were available than the page cap allowed
    pub truncated: bool,
}

impl FeedResponse {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
