//! Repository traits (ports) - the data the domain layer needs from outside
//!
//! The query layer that joins audit rows with their context lives outside
//! this workspace and implements these traits.

use async_trait::async_trait;

use crate::changelog::FeedRecord;
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Change Log Source
// ============================================================================

#[async_trait]
pub trait ChangeLogSource: Send + Sync {
    /// Fetch the newest `limit` audit rows touching a project, each joined
    /// with its context and project scope.
    ///
    /// "Newest" follows the feed order: `created_at` descending, then id
    /// descending (see [`crate::changelog::sort_records`]). The returned
    /// vector itself may be in any order.
    async fn fetch_project_feed(
        &self,
        project_id: &RecordId,
        limit: usize,
    ) -> RepoResult<Vec<FeedRecord>>;
}
