//! Field rules - the per-field shape checks a [`super::Schema`] is built from

use chrono::{DateTime, NaiveDate};
use serde_json::Value as JsonValue;

use crate::error::FieldViolation;

/// JSON type name used in violation messages
pub fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Accepted shape of a field value. No coercion happens between shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    /// Non-negative integer that fits in 64 bits
    Count,
    /// String or integer key
    Id,
    /// RFC 3339 timestamp string
    Timestamp,
    /// `YYYY-MM-DD` or RFC 3339 string
    Date,
    /// One of a fixed set of strings
    OneOf(&'static [&'static str]),
    /// Any JSON value
    Any,
}

impl FieldType {
    /// Human-readable shape name
    pub fn expected(&self) -> &'static str {
        match self {
            Self::String | Self::OneOf(_) => "string",
            Self::Count => "non-negative integer",
            Self::Id => "string or integer",
            Self::Timestamp => "RFC 3339 timestamp",
            Self::Date => "date",
            Self::Any => "any",
        }
    }

    /// Check a present, non-null value
    pub fn check(&self, field: &str, value: &JsonValue) -> Option<FieldViolation> {
        let found = json_type_name(value);
        let wrong_type = || Some(FieldViolation::wrong_type(field, self.expected(), found));

        match (self, value) {
            (Self::Any, _) => None,
            (Self::String, JsonValue::String(_)) => None,
            (Self::Count, JsonValue::Number(n)) if n.is_u64() => None,
            (Self::Id, JsonValue::String(_)) => None,
            (Self::Id, JsonValue::Number(n)) if n.is_i64() || n.is_u64() => None,
            (Self::Timestamp, JsonValue::String(s)) => DateTime::parse_from_rfc3339(s)
                .err()
                .map(|_| FieldViolation::invalid(field, "must be an RFC 3339 timestamp")),
            (Self::Date, JsonValue::String(s)) => {
                (parse_date(s).is_none()).then(|| FieldViolation::invalid(field, "must be a date"))
            }
            (Self::OneOf(allowed), JsonValue::String(s)) => (!allowed.contains(&s.as_str()))
                .then(|| FieldViolation::not_allowed(field, s.as_str(), *allowed)),
            _ => wrong_type(),
        }
    }
}

/// Parse `YYYY-MM-DD`, or take the date part of an RFC 3339 timestamp
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// A single field of a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl FieldRule {
    /// Apply the rule to the field's value, `None` meaning absent.
    /// Null counts as absent.
    pub fn apply(&self, value: Option<&JsonValue>) -> Option<FieldViolation> {
        match value {
            None | Some(JsonValue::Null) if self.required => Some(FieldViolation::missing(self.name)),
            None | Some(JsonValue::Null) => None,
            Some(value) => self.ty.check(self.name, value),
        }
    }
}
