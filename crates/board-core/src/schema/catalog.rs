//! Schemas for the records this crate knows how to validate

use serde_json::{Map, Value as JsonValue};

use super::{FieldType, Schema};
use crate::changelog::Operation;
use crate::error::FieldViolation;

pub fn label_schema() -> Schema {
    Schema::new("label")
        .optional("id", FieldType::Id)
        .required("project_id", FieldType::Id)
        .required("name", FieldType::String)
        .required("color", FieldType::String)
        .optional("description", FieldType::String)
}

pub fn milestone_schema() -> Schema {
    Schema::new("milestone")
        .required("id", FieldType::Id)
        .required("name", FieldType::String)
        .required("project_id", FieldType::Id)
        .optional("description", FieldType::String)
        .optional("due_date", FieldType::Date)
        .optional("all_tasks_count", FieldType::Count)
        .optional("completed_tasks_count", FieldType::Count)
        .check(task_counts_paired)
        .check(task_counts_in_range)
}

pub fn file_schema() -> Schema {
    Schema::new("file")
        .optional("id", FieldType::Id)
        .required("project_id", FieldType::Id)
        .required("name", FieldType::String)
        .required("size", FieldType::Count)
        .optional("mime_type", FieldType::String)
        .optional("path", FieldType::String)
        .optional("task_id", FieldType::Id)
        .optional("uploaded_by", FieldType::Id)
}

pub fn user_schema() -> Schema {
    Schema::new("user")
        .required("id", FieldType::Id)
        .required("name", FieldType::String)
        .required("email", FieldType::String)
        .optional("avatar_url", FieldType::String)
}

pub fn audit_row_schema() -> Schema {
    Schema::new("audit_row")
        .required("id", FieldType::Id)
        .required("table_name", FieldType::String)
        .required("operation", FieldType::OneOf(Operation::ALLOWED))
        .optional("new_data", FieldType::Any)
        .optional("old_data", FieldType::Any)
        .optional("changed_by", FieldType::Id)
        .optional("created_at", FieldType::Timestamp)
}

/// The two milestone counters come as a pair or not at all
fn task_counts_paired(map: &Map<String, JsonValue>) -> Vec<FieldViolation> {
    let present = |key: &str| map.get(key).is_some_and(|v| !v.is_null());

    match (present("all_tasks_count"), present("completed_tasks_count")) {
        (true, false) => vec![FieldViolation::invalid(
            "completed_tasks_count",
            "required when all_tasks_count is set",
        )],
        (false, true) => vec![FieldViolation::invalid(
            "all_tasks_count",
            "required when completed_tasks_count is set",
        )],
        _ => Vec::new(),
    }
}

/// Completed tasks can never outnumber all tasks. Counters that are missing
/// or mistyped are left to their field rules.
fn task_counts_in_range(map: &Map<String, JsonValue>) -> Vec<FieldViolation> {
    let count = |key: &str| map.get(key).and_then(JsonValue::as_u64);

    match (count("all_tasks_count"), count("completed_tasks_count")) {
        (Some(all), Some(completed)) if completed > all => vec![FieldViolation::invalid(
            "completed_tasks_count",
            format!("must not exceed all_tasks_count ({completed} > {all})"),
        )],
        _ => Vec::new(),
    }
}
