//! Test fixtures and data generators
//!
//! Provides reusable audit rows, joined contexts, and an in-memory
//! change-log source for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use board_core::changelog::{
    AssignmentDetails, CommentDetails, EnrichmentContext, FileDetails, MilestoneDetails,
    ProjectMemberDetails, TaskDetails, TaskLabelDetails, UserDetails,
};
use board_core::traits::{ChangeLogSource, RepoResult};
use board_core::{sort_records, AuditRow, FeedRecord, Operation, ProjectScope, RecordId};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use tokio::sync::RwLock;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Fixed reference instant; fixtures offset from it by minutes
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn at_minute(minute: i64) -> DateTime<Utc> {
    base_time() + Duration::minutes(minute)
}

// ============================================================================
// Audit Rows
// ============================================================================

/// Row touching a record of `project_id`, created `minute` minutes after the base time
pub fn audit_row(table: &str, operation: Operation, project_id: &str, minute: i64) -> AuditRow {
    AuditRow::new(unique_suffix() as i64, table, operation)
        .with_new_data(json!({ "project_id": project_id }))
        .with_changed_by("u1")
        .with_created_at(at_minute(minute))
}

// ============================================================================
// Contexts
// ============================================================================

pub fn assignment_context() -> EnrichmentContext {
    AssignmentDetails {
        user_id: RecordId::new("u2"),
        user_name: "Bo".to_string(),
        user_email: "bo@example.com".to_string(),
        task_title: "Draft homepage copy".to_string(),
    }
    .into()
}

pub fn comment_context(comment: &str) -> EnrichmentContext {
    CommentDetails {
        user_id: RecordId::new("u1"),
        user_name: "Ann".to_string(),
        user_email: "ann@example.com".to_string(),
        comment: comment.to_string(),
        task_title: "Fix navbar".to_string(),
    }
    .into()
}

pub fn milestone_context() -> EnrichmentContext {
    MilestoneDetails {
        milestone_name: "Public beta".to_string(),
    }
    .into()
}

pub fn file_context(task_title: Option<&str>) -> EnrichmentContext {
    FileDetails {
        file_name: "wireframe.png".to_string(),
        user_name: "Ann".to_string(),
        task_title: task_title.map(str::to_string),
    }
    .into()
}

pub fn project_member_context() -> EnrichmentContext {
    ProjectMemberDetails {
        user_id: RecordId::new("u3"),
        user_name: "Cy".to_string(),
        user_email: "cy@example.com".to_string(),
        role: "editor".to_string(),
    }
    .into()
}

pub fn task_label_context() -> EnrichmentContext {
    TaskLabelDetails {
        label_name: "bug".to_string(),
        label_color: "#d73a4a".to_string(),
        task_title: "Fix navbar".to_string(),
    }
    .into()
}

pub fn task_context() -> EnrichmentContext {
    TaskDetails {
        task_title: "Fix navbar".to_string(),
        milestone_name: Some("Public beta".to_string()),
    }
    .into()
}

pub fn user_context() -> EnrichmentContext {
    UserDetails {
        user_name: "Ann".to_string(),
        user_email: "ann@example.com".to_string(),
    }
    .into()
}

/// One matching (table, context) pair per enrichment variant
pub fn every_variant() -> Vec<(&'static str, EnrichmentContext)> {
    vec![
        ("task_assignees", assignment_context()),
        ("comments", comment_context("Looks good")),
        ("milestones", milestone_context()),
        ("files", file_context(None)),
        ("project_members", project_member_context()),
        ("task_labels", task_label_context()),
        ("tasks", task_context()),
        ("users", user_context()),
    ]
}

// ============================================================================
// In-Memory Change Log
// ============================================================================

/// Change-log source backed by a vector, filtered by the row's `project_id`
#[derive(Debug, Default)]
pub struct InMemoryChangeLogSource {
    records: RwLock<Vec<FeedRecord>>,
}

impl InMemoryChangeLogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<FeedRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn push(&self, row: AuditRow, context: Option<EnrichmentContext>, project: ProjectScope) {
        self.records
            .write()
            .await
            .push(FeedRecord::new(row, context, project));
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ChangeLogSource for InMemoryChangeLogSource {
    /// Returns the newest `limit` matching records, newest first
    async fn fetch_project_feed(
        &self,
        project_id: &RecordId,
        limit: usize,
    ) -> RepoResult<Vec<FeedRecord>> {
        let records = self.records.read().await;
        let mut matching: Vec<FeedRecord> = records
            .iter()
            .filter(|r| r.row.project_id().as_ref() == Some(project_id))
            .cloned()
            .collect();
        sort_records(&mut matching);
        matching.truncate(limit);
        Ok(matching)
    }
}
