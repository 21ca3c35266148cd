//! Feed entries - audit rows joined with their display context

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{AuditRow, AuditedTable, EnrichmentContext, EntryKind, Operation};
use crate::value_objects::RecordId;

/// Placeholder shown for project-scoped entries whose project was deleted
pub const UNKNOWN_PROJECT_LABEL: &str = "Unknown project";

/// Keys an entry emits itself; passthrough columns with these names are dropped
const RESERVED_KEYS: &[&str] = &[
    "kind",
    "projectName",
    "assignment",
    "comment",
    "milestone",
    "file",
    "projectMember",
    "task_label",
    "task",
    "user",
];

/// What the query layer knows about the project a row belongs to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectScope {
    /// Project name joined successfully
    Resolved(String),
    /// Parent project no longer exists
    Deleted,
    /// No name was supplied
    #[default]
    Unresolved,
}

impl ProjectScope {
    pub fn resolved(name: impl Into<String>) -> Self {
        Self::Resolved(name.into())
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Resolved(name) => Some(name),
            Self::Deleted | Self::Unresolved => None,
        }
    }
}

impl From<Option<String>> for ProjectScope {
    fn from(name: Option<String>) -> Self {
        name.map_or(Self::Unresolved, Self::Resolved)
    }
}

/// A discriminated activity-feed item
///
/// Built only by [`super::reconcile`], so the payload always matches the row's
/// table and `project_name` follows the scoping rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeLogEntry {
    row: AuditRow,
    details: Option<EnrichmentContext>,
    project_name: Option<String>,
}

impl ChangeLogEntry {
    pub(crate) fn new(
        row: AuditRow,
        details: Option<EnrichmentContext>,
        project_name: Option<String>,
    ) -> Self {
        Self {
            row,
            details,
            project_name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.details
            .as_ref()
            .map_or(EntryKind::Bare, EnrichmentContext::kind)
    }

    pub fn row(&self) -> &AuditRow {
        &self.row
    }

    pub fn details(&self) -> Option<&EnrichmentContext> {
        self.details.as_ref()
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    #[inline]
    pub fn id(&self) -> &RecordId {
        &self.row.id
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        self.row.operation
    }

    #[inline]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.row.created_at
    }

    /// Project label to render, `None` for entries that are not project-scoped
    pub fn project_label(&self) -> Option<&str> {
        if self.row.table() == Some(AuditedTable::Users) {
            return None;
        }
        Some(self.project_name().unwrap_or(UNKNOWN_PROJECT_LABEL))
    }

    /// One-line description, e.g. `comment created: Fix bug`
    pub fn headline(&self) -> String {
        match &self.details {
            Some(details) => format!(
                "{} {}: {}",
                details.kind(),
                self.row.operation.verb(),
                details.subject()
            ),
            None => format!("{} {}", self.row.table_name, self.row.operation.verb()),
        }
    }

    pub fn into_parts(self) -> (AuditRow, Option<EnrichmentContext>, Option<String>) {
        (self.row, self.details, self.project_name)
    }
}

/// Emits the row columns, a `kind` tag, the single payload key, and
/// `projectName` when present.
impl Serialize for ChangeLogEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let row = &self.row;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &row.id)?;
        map.serialize_entry("table_name", &row.table_name)?;
        map.serialize_entry("operation", &row.operation)?;
        if let Some(new_data) = &row.new_data {
            map.serialize_entry("new_data", new_data)?;
        }
        if let Some(old_data) = &row.old_data {
            map.serialize_entry("old_data", old_data)?;
        }
        if let Some(changed_by) = &row.changed_by {
            map.serialize_entry("changed_by", changed_by)?;
        }
        if let Some(created_at) = &row.created_at {
            map.serialize_entry("created_at", created_at)?;
        }
        for (key, value) in &row.extra {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }

        map.serialize_entry("kind", &self.kind())?;
        if let Some(details) = &self.details {
            if let Some(key) = details.kind().payload_key() {
                match details {
                    EnrichmentContext::Assignment(d) => map.serialize_entry(key, d)?,
                    EnrichmentContext::Comment(d) => map.serialize_entry(key, d)?,
                    EnrichmentContext::Milestone(d) => map.serialize_entry(key, d)?,
                    EnrichmentContext::File(d) => map.serialize_entry(key, d)?,
                    EnrichmentContext::ProjectMember(d) => map.serialize_entry(key, d)?,
                    EnrichmentContext::TaskLabel(d) => map.serialize_entry(key, d)?,
                    EnrichmentContext::Task(d) => map.serialize_entry(key, d)?,
                    EnrichmentContext::User(d) => map.serialize_entry(key, d)?,
                }
            }
        }
        if let Some(project_name) = &self.project_name {
            map.serialize_entry("projectName", project_name)?;
        }
        map.end()
    }
}
