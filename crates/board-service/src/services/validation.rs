//! Record validation service
//!
//! Validates untyped JSON candidates in two passes. The schema shape pass
//! collects every missing or mistyped field. Candidates that pass it are
//! deserialized into their payload DTO, whose content rules are then checked
//! and reported as one batch.

use board_core::entities::{Label, Milestone, ProjectFile, User};
use board_core::schema::{
    audit_row_schema, file_schema, label_schema, milestone_schema, user_schema, Schema, ROOT_FIELD,
};
use board_core::{AuditRow, FieldViolation, ValidationError};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::{debug, instrument};
use validator::Validate;

use crate::dto::{FilePayload, LabelPayload, MilestonePayload, UserPayload};

/// Validates candidate records into domain types
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    label: Schema,
    milestone: Schema,
    file: Schema,
    user: Schema,
    audit_row: Schema,
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaValidator {
    pub fn new() -> Self {
        Self {
            label: label_schema(),
            milestone: milestone_schema(),
            file: file_schema(),
            user: user_schema(),
            audit_row: audit_row_schema(),
        }
    }

    #[instrument(level = "debug", skip_all)]
    pub fn validate_label(&self, candidate: &JsonValue) -> Result<Label, ValidationError> {
        let payload: LabelPayload = Self::checked(&self.label, candidate)?;
        Ok(payload.into())
    }

    #[instrument(level = "debug", skip_all)]
    pub fn validate_milestone(&self, candidate: &JsonValue) -> Result<Milestone, ValidationError> {
        let payload: MilestonePayload = Self::checked(&self.milestone, candidate)?;
        Milestone::try_from(payload)
    }

    #[instrument(level = "debug", skip_all)]
    pub fn validate_file(&self, candidate: &JsonValue) -> Result<ProjectFile, ValidationError> {
        let payload: FilePayload = Self::checked(&self.file, candidate)?;
        Ok(payload.into())
    }

    #[instrument(level = "debug", skip_all)]
    pub fn validate_user(&self, candidate: &JsonValue) -> Result<User, ValidationError> {
        let payload: UserPayload = Self::checked(&self.user, candidate)?;
        Ok(payload.into())
    }

    /// Validate a raw audit row; unknown columns are kept as passthrough
    #[instrument(level = "debug", skip_all)]
    pub fn validate_audit_row(&self, candidate: &JsonValue) -> Result<AuditRow, ValidationError> {
        let object = self
            .audit_row
            .validate(candidate)
            .inspect_err(|e| log_rejected(&self.audit_row, e))?;
        let row: AuditRow = deserialize(object)?;

        if row.table_name.trim().is_empty() {
            return Err(FieldViolation::invalid("table_name", "must not be blank").into());
        }
        Ok(row)
    }

    /// Shape pass, then content rules
    fn checked<P>(schema: &Schema, candidate: &JsonValue) -> Result<P, ValidationError>
    where
        P: DeserializeOwned + Validate,
    {
        let object = schema
            .validate(candidate)
            .inspect_err(|e| log_rejected(schema, e))?;
        let payload: P = deserialize(object)?;
        payload
            .validate()
            .map_err(ValidationError::from)
            .inspect_err(|e| log_rejected(schema, e))?;
        Ok(payload)
    }
}

fn deserialize<T: DeserializeOwned>(
    object: &serde_json::Map<String, JsonValue>,
) -> Result<T, ValidationError> {
    serde_json::from_value(JsonValue::Object(object.clone()))
        .map_err(|e| FieldViolation::invalid(ROOT_FIELD, e.to_string()).into())
}

fn log_rejected(schema: &Schema, errors: &ValidationError) {
    debug!(entity = schema.entity(), violations = errors.len(), "Candidate rejected");
}
