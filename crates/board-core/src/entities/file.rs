//! File entity - an upload attached to a project and optionally a task

use crate::value_objects::RecordId;

/// Uploaded project file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub id: Option<RecordId>,
    pub project_id: RecordId,
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub mime_type: Option<String>,
    pub path: Option<String>,
    pub task_id: Option<RecordId>,
    pub uploaded_by: Option<RecordId>,
}

impl ProjectFile {
    /// Create a new ProjectFile
    pub fn new(project_id: RecordId, name: String, size: u64) -> Self {
        Self {
            id: None,
            project_id,
            name,
            size,
            mime_type: None,
            path: None,
            task_id: None,
            uploaded_by: None,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|m| m.starts_with("image/"))
    }
}
