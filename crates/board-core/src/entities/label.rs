//! Label entity - a colored tag tasks can carry within one project

use crate::value_objects::RecordId;

/// Label entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub id: Option<RecordId>,
    pub project_id: RecordId,
    pub name: String,
    pub color: String,
    pub description: String,
}

impl Label {
    /// Create a new Label with an empty description
    pub fn new(project_id: RecordId, name: String, color: String) -> Self {
        Self {
            id: None,
            project_id,
            name,
            color,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    #[inline]
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
