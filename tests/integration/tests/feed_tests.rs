//! Activity feed integration tests
//!
//! Exercise enrichment and feed assembly end to end over the in-memory
//! change-log source.

use std::sync::Arc;

use board_common::FeedConfig;
use board_core::{
    AuditRow, EntryKind, Operation, ProjectScope, RecordId, UNKNOWN_PROJECT_LABEL,
};
use board_service::{FeedService, LogEnricher, ServiceError};
use integration_tests::*;

// ============================================================================
// Enrichment
// ============================================================================

#[test]
fn test_comment_entry_end_to_end() {
    let row = AuditRow::new(101, "comments", Operation::Create)
        .with_new_data(serde_json::json!({"project_id": "p1", "content": "Looks good"}))
        .with_changed_by("u1")
        .with_created_at(at_minute(5));

    let entry = LogEnricher::new()
        .enrich(
            row,
            Some(comment_context("Looks good")),
            ProjectScope::resolved("Website Redesign"),
        )
        .unwrap();

    let json = entry_json(&entry).unwrap();
    assert_eq!(json["id"], "101");
    assert_eq!(json["table_name"], "comments");
    assert_eq!(json["operation"], "CREATE");
    assert_eq!(json["kind"], "comment");
    assert_eq!(json["comment"]["comment"], "Looks good");
    assert_eq!(json["comment"]["user_name"], "Ann");
    assert_eq!(json["projectName"], "Website Redesign");
    assert_eq!(populated_payload_keys(&json), vec!["comment"]);
    assert_eq!(entry.headline(), "comment created: Fix navbar");
}

#[test]
fn test_every_variant_populates_exactly_its_key() {
    for (table, context) in every_variant() {
        let row = audit_row(table, Operation::Update, "p1", 0);
        let expected = context.kind();
        let entry = LogEnricher::new()
            .enrich(row, Some(context), ProjectScope::resolved("Website Redesign"))
            .unwrap();

        assert_eq!(entry.kind(), expected, "table {table}");
        let json = entry_json(&entry).unwrap();
        let keys = populated_payload_keys(&json);
        assert_eq!(keys, vec![expected.payload_key().unwrap()], "table {table}");

        if table == "users" {
            assert!(json.get("projectName").is_none());
            assert_eq!(entry.project_label(), None);
        } else {
            assert_eq!(json["projectName"], "Website Redesign", "table {table}");
        }
    }
}

#[test]
fn test_pending_invitation_falls_back_to_bare() {
    let row = audit_row("pending_project_invitations", Operation::Create, "p1", 0);
    let entry = LogEnricher::new()
        .enrich(row, None, ProjectScope::resolved("Website Redesign"))
        .unwrap();

    assert_eq!(entry.kind(), EntryKind::Bare);
    let json = entry_json(&entry).unwrap();
    assert_eq!(json["kind"], "bare");
    assert!(populated_payload_keys(&json).is_empty());
    assert_eq!(json["projectName"], "Website Redesign");
}

#[test]
fn test_deleted_project_renders_placeholder() {
    let row = audit_row("tasks", Operation::Delete, "p-gone", 0);
    let entry = LogEnricher::new()
        .enrich(row, Some(task_context()), ProjectScope::Deleted)
        .unwrap();

    let json = entry_json(&entry).unwrap();
    assert!(json.get("projectName").is_none());
    assert_eq!(entry.project_label(), Some(UNKNOWN_PROJECT_LABEL));
}

#[test]
fn test_enrichment_is_idempotent() {
    let row = audit_row("files", Operation::Create, "p1", 3);
    let enrich = || {
        LogEnricher::new()
            .enrich(
                row.clone(),
                Some(file_context(Some("Fix navbar"))),
                ProjectScope::resolved("Website Redesign"),
            )
            .unwrap()
    };

    let first = enrich();
    let second = enrich();
    assert_eq!(first, second);
    assert_eq!(entry_json(&first).unwrap(), entry_json(&second).unwrap());
}

#[test]
fn test_context_mismatch_is_reported() {
    let row = audit_row("task_labels", Operation::Create, "p1", 0);
    let err = LogEnricher::new()
        .enrich(row, Some(milestone_context()), ProjectScope::resolved("P"))
        .unwrap_err();
    assert_eq!(err.code(), "CONTEXT_MISMATCH");
}

// ============================================================================
// Feed Assembly
// ============================================================================

#[tokio::test]
async fn test_project_feed_order_and_scope() {
    let source = Arc::new(InMemoryChangeLogSource::new());
    source
        .push(
            audit_row("tasks", Operation::Create, "p1", 1),
            Some(task_context()),
            ProjectScope::resolved("Website Redesign"),
        )
        .await;
    source
        .push(
            audit_row("comments", Operation::Create, "p1", 9),
            Some(comment_context("First!")),
            ProjectScope::resolved("Website Redesign"),
        )
        .await;
    source
        .push(
            audit_row("comments", Operation::Create, "p2", 5),
            Some(comment_context("Other project")),
            ProjectScope::resolved("Mobile App"),
        )
        .await;
    source
        .push(
            audit_row("projects", Operation::Update, "p1", 4),
            None,
            ProjectScope::resolved("Website Redesign"),
        )
        .await;

    let ctx = test_context(source, FeedConfig::default());
    let feed = FeedService::new(&ctx)
        .project_feed(&RecordId::new("p1"))
        .await
        .unwrap();

    let kinds: Vec<EntryKind> = feed.entries.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![EntryKind::Comment, EntryKind::Bare, EntryKind::Task]
    );
    assert_eq!(feed.skipped, 0);

    let json = serde_json::to_value(&feed).unwrap();
    assert_eq!(json["project_id"], "p1");
    assert_eq!(json["entries"][0]["comment"]["comment"], "First!");
}

#[tokio::test]
async fn test_project_feed_drops_inconsistent_rows() {
    let source = Arc::new(InMemoryChangeLogSource::new());
    source
        .push(
            audit_row("milestones", Operation::Update, "p1", 2),
            Some(milestone_context()),
            ProjectScope::Unresolved,
        )
        .await;
    source
        .push(
            audit_row("task_assignees", Operation::Create, "p1", 1),
            Some(assignment_context()),
            ProjectScope::resolved("Website Redesign"),
        )
        .await;

    let ctx = test_context(source.clone(), FeedConfig::default());
    let feed = FeedService::new(&ctx)
        .project_feed(&RecordId::new("p1"))
        .await
        .unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed.skipped, 1);
    assert_eq!(feed.entries[0].kind(), EntryKind::Assignment);

    let strict = test_context(
        source,
        FeedConfig {
            skip_malformed: false,
            ..FeedConfig::default()
        },
    );
    let err = FeedService::new(&strict)
        .project_feed(&RecordId::new("p1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Mapping(_)));
}

#[tokio::test]
async fn test_project_feed_unknown_table_is_kept() {
    let source = Arc::new(InMemoryChangeLogSource::new());
    source
        .push(
            audit_row("webhook_deliveries", Operation::Create, "p1", 0),
            Some(comment_context("ignored")),
            ProjectScope::Unresolved,
        )
        .await;

    let ctx = test_context(source, FeedConfig::default());
    let feed = FeedService::new(&ctx)
        .project_feed(&RecordId::new("p1"))
        .await
        .unwrap();

    assert_eq!(feed.len(), 1);
    let json = entry_json(&feed.entries[0]).unwrap();
    assert_eq!(json["kind"], "bare");
    assert!(json.get("projectName").is_none());
    assert!(populated_payload_keys(&json).is_empty());
}

#[tokio::test]
async fn test_project_feed_respects_page_cap() {
    let source = Arc::new(InMemoryChangeLogSource::new());
    for minute in 0..5 {
        source
            .push(
                audit_row("comments", Operation::Create, "p1", minute),
                Some(comment_context("spam")),
                ProjectScope::resolved("Website Redesign"),
            )
            .await;
    }
    assert_eq!(source.len().await, 5);

    let ctx = test_context(
        source,
        FeedConfig {
            max_entries: 3,
            skip_malformed: true,
        },
    );
    let feed = FeedService::new(&ctx)
        .project_feed(&RecordId::new("p1"))
        .await
        .unwrap();

    assert_eq!(feed.len(), 3);
    assert!(feed.truncated);
    let times: Vec<_> = feed.entries.iter().filter_map(|e| e.created_at()).collect();
    assert_eq!(times, vec![at_minute(4), at_minute(3), at_minute(2)]);
}

#[tokio::test]
async fn test_project_feed_page_keeps_newest_inserted_first() {
    let source = Arc::new(InMemoryChangeLogSource::new());
    for minute in [30, 10, 20] {
        source
            .push(
                audit_row("comments", Operation::Create, "p1", minute),
                Some(comment_context("note")),
                ProjectScope::resolved("Website Redesign"),
            )
            .await;
    }

    let ctx = test_context(
        source,
        FeedConfig {
            max_entries: 2,
            skip_malformed: true,
        },
    );
    let feed = FeedService::new(&ctx)
        .project_feed(&RecordId::new("p1"))
        .await
        .unwrap();

    let times: Vec<_> = feed.entries.iter().filter_map(|e| e.created_at()).collect();
    assert_eq!(times, vec![at_minute(30), at_minute(20)]);
    assert!(feed.truncated);
}

#[tokio::test]
async fn test_project_feed_exact_page_not_truncated() {
    let source = Arc::new(InMemoryChangeLogSource::new());
    for minute in 0..2 {
        source
            .push(
                audit_row("comments", Operation::Create, "p1", minute),
                Some(comment_context("note")),
                ProjectScope::resolved("Website Redesign"),
            )
            .await;
    }

    let ctx = test_context(
        source,
        FeedConfig {
            max_entries: 2,
            skip_malformed: true,
        },
    );
    let feed = FeedService::new(&ctx)
        .project_feed(&RecordId::new("p1"))
        .await
        .unwrap();

    assert_eq!(feed.len(), 2);
    assert!(!feed.truncated);
}
