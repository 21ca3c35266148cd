//! Batch validation errors
//!
//! A [`ValidationError`] always carries every violation found for a candidate,
//! one entry per field and rule, so callers can render all issues at once.

use serde::Serialize;
use std::fmt;

/// What went wrong with a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field absent or null
    Missing,

    /// Field present with the wrong JSON type
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    /// Value outside its allowed set
    NotAllowed {
        value: String,
        allowed: &'static [&'static str],
    },

    /// Value has the right type but breaks a content rule
    Invalid { message: String },
}

/// A single violated field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::Missing,
        }
    }

    pub fn wrong_type(field: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::WrongType { expected, found },
        }
    }

    pub fn not_allowed(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::NotAllowed {
                value: value.into(),
                allowed,
            },
        }
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::Invalid {
                message: message.into(),
            },
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "{}: required field is missing", self.field),
            ViolationKind::WrongType { expected, found } => {
                write!(f, "{}: expected {expected}, found {found}", self.field)
            }
            ViolationKind::NotAllowed { value, allowed } => write!(
                f,
                "{}: `{value}` is not one of {}",
                self.field,
                allowed.join(", ")
            ),
            ViolationKind::Invalid { message } => write!(f, "{}: {message}", self.field),
        }
    }
}

/// One or more field violations for a single candidate record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed validation", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    pub fn extend(&mut self, other: ValidationError) {
        self.violations.extend(other.violations);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    /// Check whether any violation names the given field
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Ok(value) if nothing was collected, otherwise the whole batch
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<FieldViolation> for ValidationError {
    fn from(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl FromIterator<FieldViolation> for ValidationError {
    fn from_iter<I: IntoIterator<Item = FieldViolation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

/// Schema-level rules report under `__all__`; they name their field through a
/// `field` param instead.
impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter()
                    .map(move |err| {
                        let target = err
                            .params
                            .get("field")
                            .and_then(serde_json::Value::as_str)
                            .map_or_else(|| field.clone(), str::to_string);
                        let message = err
                            .message
                            .as_ref()
                            .map_or_else(|| err.code.to_string(), ToString::to_string);
                        FieldViolation::invalid(target, message)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        Self { violations }
    }
}
