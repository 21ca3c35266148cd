//! Declarative record schemas
//!
//! A [`Schema`] is a chain of field rules plus cross-field checks. Validation
//! never stops at the first problem: every rule runs and every violation is
//! collected into one [`ValidationError`].

mod catalog;
mod rules;

pub use catalog::{
    audit_row_schema, file_schema, label_schema, milestone_schema, user_schema,
};
pub use rules::{json_type_name, parse_date, FieldRule, FieldType};

use serde_json::{Map, Value as JsonValue};

use crate::error::{FieldViolation, ValidationError};

/// Field name used when the candidate itself has the wrong shape
pub const ROOT_FIELD: &str = "$";

/// Check spanning several fields, run after the per-field rules
pub type CrossFieldCheck = fn(&Map<String, JsonValue>) -> Vec<FieldViolation>;

/// Shape rules for one kind of record
#[derive(Debug, Clone)]
pub struct Schema {
    entity: &'static str,
    rules: Vec<FieldRule>,
    checks: Vec<CrossFieldCheck>,
}

impl Schema {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            rules: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Add a field that must be present and non-null
    pub fn required(mut self, name: &'static str, ty: FieldType) -> Self {
        self.rules.push(FieldRule {
            name,
            ty,
            required: true,
        });
        self
    }

    /// Add a field that may be absent or null
    pub fn optional(mut self, name: &'static str, ty: FieldType) -> Self {
        self.rules.push(FieldRule {
            name,
            ty,
            required: false,
        });
        self
    }

    pub fn check(mut self, check: CrossFieldCheck) -> Self {
        self.checks.push(check);
        self
    }

    #[inline]
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Run every rule against the candidate
    ///
    /// Returns the candidate's object map when all rules pass. Fields not named
    /// by any rule are ignored.
    pub fn validate<'a>(
        &self,
        candidate: &'a JsonValue,
    ) -> Result<&'a Map<String, JsonValue>, ValidationError> {
        let Some(object) = candidate.as_object() else {
            return Err(FieldViolation::wrong_type(
                ROOT_FIELD,
                "object",
                json_type_name(candidate),
            )
            .into());
        };

        let errors: ValidationError = self
            .rules
            .iter()
            .filter_map(|rule| rule.apply(object.get(rule.name)))
            .chain(self.checks.iter().flat_map(|check| check(object)))
            .collect();

        errors.into_result(object)
    }
}
