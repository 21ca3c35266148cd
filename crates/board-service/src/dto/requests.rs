//! Payload DTOs for validated records
//!
//! Each payload is deserialized only after its schema shape pass succeeded,
//! then checked against the content rules declared here.

use std::borrow::Cow;

use board_core::RecordId;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Custom Rules
// ============================================================================

fn non_blank_id(id: &RecordId) -> Result<(), validator::ValidationError> {
    if id.as_str().trim().is_empty() {
        let mut err = validator::ValidationError::new("blank_id");
        err.message = Some(Cow::Borrowed("ID must not be blank"));
        return Err(err);
    }
    Ok(())
}

// ============================================================================
// Label Payloads
// ============================================================================

/// Label record
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LabelPayload {
    pub id: Option<RecordId>,

    #[validate(custom(function = "non_blank_id"))]
    pub project_id: RecordId,

    #[validate(length(min = 1, max = 100, message = "Label name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Label color must be 1-32 characters"))]
    pub color: String,

    /// Absent or null means empty
    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Milestone Payloads
// ============================================================================

/// Milestone record with optional denormalized task counters. Pairing and
/// range of the counters are checked by the milestone schema.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MilestonePayload {
    #[validate(custom(function = "non_blank_id"))]
    pub id: RecordId,

    #[validate(custom(function = "non_blank_id"))]
    pub project_id: RecordId,

    #[validate(length(min = 1, max = 200, message = "Milestone name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// `YYYY-MM-DD` or RFC 3339, already shape-checked
    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub all_tasks_count: Option<u64>,

    #[serde(default)]
    pub completed_tasks_count: Option<u64>,
}

// ============================================================================
// File Payloads
// ============================================================================

/// Uploaded file record
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FilePayload {
    pub id: Option<RecordId>,

    #[validate(custom(function = "non_blank_id"))]
    pub project_id: RecordId,

    #[validate(length(min = 1, max = 255, message = "File name must be 1-255 characters"))]
    pub name: String,

    /// Size in bytes
    pub size: u64,

    #[serde(default)]
    #[validate(length(min = 3, max = 255, message = "MIME type must be 3-255 characters"))]
    pub mime_type: Option<String>,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub task_id: Option<RecordId>,

    #[serde(default)]
    pub uploaded_by: Option<RecordId>,
}

// ============================================================================
// User Payloads
// ============================================================================

/// User record
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(custom(function = "non_blank_id"))]
    pub id: RecordId,

    #[validate(length(min = 1, max = 100, message = "User name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar_url: Option<String>,
}
