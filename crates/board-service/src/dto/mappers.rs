//! Payload to entity mappers
//!
//! Payloads reaching these conversions already passed their shape and content
//! rules, so the only failures left are ones the rules cannot express.

use board_core::entities::{Label, Milestone, ProjectFile, User};
use board_core::schema::parse_date;
use board_core::{FieldViolation, TaskCounts, ValidationError};

use super::requests::{FilePayload, LabelPayload, MilestonePayload, UserPayload};

// ============================================================================
// Label Mappers
// ============================================================================

impl From<LabelPayload> for Label {
    fn from(payload: LabelPayload) -> Self {
        Self {
            id: payload.id,
            project_id: payload.project_id,
            name: payload.name,
            color: payload.color,
            description: payload.description.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Milestone Mappers
// ============================================================================

impl TryFrom<MilestonePayload> for Milestone {
    type Error = ValidationError;

    fn try_from(payload: MilestonePayload) -> Result<Self, Self::Error> {
        let mut errors = ValidationError::new();

        let due_date = match payload.due_date.as_deref() {
            Some(raw) => {
                let parsed = parse_date(raw);
                if parsed.is_none() {
                    errors.push(FieldViolation::invalid("due_date", "must be a date"));
                }
                parsed
            }
            None => None,
        };

        let task_counts = match (payload.all_tasks_count, payload.completed_tasks_count) {
            (Some(all), Some(completed)) => match TaskCounts::new(all, completed) {
                Ok(counts) => Some(counts),
                Err(e) => {
                    errors.push(FieldViolation::invalid("completed_tasks_count", e.to_string()));
                    None
                }
            },
            (None, None) => None,
            (Some(_), None) => {
                errors.push(FieldViolation::missing("completed_tasks_count"));
                None
            }
            (None, Some(_)) => {
                errors.push(FieldViolation::missing("all_tasks_count"));
                None
            }
        };

        errors.into_result(Self {
            id: payload.id,
            project_id: payload.project_id,
            name: payload.name,
            description: payload.description,
            due_date,
            task_counts,
        })
    }
}

// ============================================================================
// File Mappers
// ============================================================================

impl From<FilePayload> for ProjectFile {
    fn from(payload: FilePayload) -> Self {
        Self {
            id: payload.id,
            project_id: payload.project_id,
            name: payload.name,
            size: payload.size,
            mime_type: payload.mime_type,
            path: payload.path,
            task_id: payload.task_id,
            uploaded_by: payload.uploaded_by,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            email: payload.email,
            avatar_url: payload.avatar_url,
        }
    }
}
