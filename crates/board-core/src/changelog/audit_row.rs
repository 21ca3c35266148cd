//! Raw audit rows as captured by the originating mutation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

use super::AuditedTable;
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Mutation that produced an audit row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Wire names, in declaration order
    pub const ALLOWED: &'static [&'static str] = &["CREATE", "UPDATE", "DELETE"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    /// Past-tense verb for feed headlines
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            other => Err(DomainError::UnknownOperation(other.to_string())),
        }
    }
}

/// One immutable audit-log row
///
/// Columns this type does not know about are kept in `extra` and emitted again
/// unchanged when the row is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRow {
    pub id: RecordId,
    pub table_name: String,
    pub operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_by: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl AuditRow {
    /// Create a row with no payloads
    pub fn new(id: impl Into<RecordId>, table_name: impl Into<String>, operation: Operation) -> Self {
        Self {
            id: id.into(),
            table_name: table_name.into(),
            operation,
            new_data: None,
            old_data: None,
            changed_by: None,
            created_at: None,
            extra: Map::new(),
        }
    }

    pub fn with_new_data(mut self, data: JsonValue) -> Self {
        self.new_data = Some(data);
        self
    }

    pub fn with_old_data(mut self, data: JsonValue) -> Self {
        self.old_data = Some(data);
        self
    }

    pub fn with_changed_by(mut self, actor: impl Into<RecordId>) -> Self {
        self.changed_by = Some(actor.into());
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Known table this row belongs to, if any
    #[inline]
    pub fn table(&self) -> Option<AuditedTable> {
        AuditedTable::parse(&self.table_name)
    }

    /// The state that best describes the record: after-image, else before-image
    pub fn current_data(&self) -> Option<&JsonValue> {
        self.new_data.as_ref().or(self.old_data.as_ref())
    }

    /// `project_id` column of the affected record, if the payload has one
    pub fn project_id(&self) -> Option<RecordId> {
        self.current_data()
            .and_then(|data| data.get("project_id"))
            .and_then(RecordId::from_json)
    }

    /// Top-level keys whose values differ between old and new data
    ///
    /// Keys present on only one side count as changed. Empty unless both
    /// images are JSON objects.
    pub fn changed_fields(&self) -> Vec<String> {
        let (Some(JsonValue::Object(old)), Some(JsonValue::Object(new))) =
            (&self.old_data, &self.new_data)
        else {
            return Vec::new();
        };

        let mut fields: Vec<String> = new
            .iter()
            .filter(|(key, value)| old.get(*key) != Some(*value))
            .map(|(key, _)| key.clone())
            .chain(old.keys().filter(|key| !new.contains_key(*key)).cloned())
            .collect();
        fields.sort();
        fields
    }
}
