//! Record validation integration tests

use board_common::{AppError, ErrorResponse};
use board_core::{RecordId, ViolationKind};
use board_service::SchemaValidator;
use integration_tests::violated_fields;
use serde_json::json;

#[test]
fn test_label_missing_name_and_color() {
    let err = SchemaValidator::new()
        .validate_label(&json!({"project_id": "p1"}))
        .unwrap_err();

    assert_eq!(err.len(), 2);
    assert_eq!(violated_fields(&err), vec!["color", "name"]);
    assert!(err
        .violations()
        .iter()
        .all(|v| v.kind == ViolationKind::Missing));
}

#[test]
fn test_label_with_empty_description() {
    let label = SchemaValidator::new()
        .validate_label(&json!({
            "id": 4, "project_id": "p1", "name": "bug", "color": "#d73a4a", "description": ""
        }))
        .unwrap();
    assert_eq!(label.id, Some(RecordId::new("4")));
    assert!(!label.has_description());
}

#[test]
fn test_milestone_completed_exceeds_all() {
    let err = SchemaValidator::new()
        .validate_milestone(&json!({
            "id": "m1", "name": "Beta", "project_id": "p1",
            "all_tasks_count": 3, "completed_tasks_count": 5
        }))
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["completed_tasks_count"]);
}

#[test]
fn test_milestone_count_range_reported_with_shape_errors() {
    let err = SchemaValidator::new()
        .validate_milestone(&json!({
            "id": "m1", "project_id": "p1",
            "all_tasks_count": 3, "completed_tasks_count": 5
        }))
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["completed_tasks_count", "name"]);
}

#[test]
fn test_milestone_large_counts_keep_field_violations() {
    let err = SchemaValidator::new()
        .validate_milestone(&json!({
            "id": "m1", "project_id": "p1", "name": "",
            "all_tasks_count": 5_000_000_000u64, "completed_tasks_count": 0
        }))
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["name"]);

    let milestone = SchemaValidator::new()
        .validate_milestone(&json!({
            "id": "m1", "project_id": "p1", "name": "Launch",
            "all_tasks_count": 5_000_000_000u64, "completed_tasks_count": 5_000_000_000u64
        }))
        .unwrap();
    assert_eq!(milestone.progress(), Some(100));
}

#[test]
fn test_milestone_shape_errors_are_batched() {
    let err = SchemaValidator::new()
        .validate_milestone(&json!({
            "name": 7, "project_id": "p1", "due_date": "soon", "all_tasks_count": -2
        }))
        .unwrap_err();
    assert_eq!(
        violated_fields(&err),
        vec!["all_tasks_count", "completed_tasks_count", "due_date", "id", "name"]
    );
}

#[test]
fn test_file_requires_numeric_size() {
    let err = SchemaValidator::new()
        .validate_file(&json!({"project_id": "p1", "name": "brief.pdf", "size": "2MB"}))
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["size"]);

    let err = SchemaValidator::new()
        .validate_file(&json!({"project_id": "p1", "name": "brief.pdf", "size": -1}))
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["size"]);
}

#[test]
fn test_file_size_is_exact_bytes() {
    let err = SchemaValidator::new()
        .validate_file(&json!({"project_id": "p1", "name": "huge.iso", "size": 1e300}))
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["size"]);

    let file = SchemaValidator::new()
        .validate_file(&json!({
            "project_id": "p1", "name": "huge.iso", "size": 9_007_199_254_740_993u64
        }))
        .unwrap();
    assert_eq!(file.size, 9_007_199_254_740_993);
}

#[test]
fn test_user_and_error_response() {
    let err = SchemaValidator::new()
        .validate_user(&json!({"id": "u1", "email": "nope"}))
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["name"]);

    let response = ErrorResponse::from(AppError::from(err));
    assert_eq!(response.code, "VALIDATION_ERROR");
    let details = response.details.unwrap();
    assert_eq!(details[0]["field"], "name");
    assert_eq!(details[0]["kind"], "missing");
}

#[test]
fn test_audit_row_round_trip_through_validator() {
    let row = SchemaValidator::new()
        .validate_audit_row(&json!({
            "id": "a-1",
            "table_name": "comments",
            "operation": "DELETE",
            "old_data": {"project_id": "p1", "content": "bye"},
            "created_at": "2024-05-01T09:00:00Z",
            "trace": "abc"
        }))
        .unwrap();

    assert_eq!(row.project_id(), Some(RecordId::new("p1")));
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["trace"], "abc");
    assert!(json.get("new_data").is_none());
}
