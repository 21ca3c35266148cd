//! Milestone entity - a dated goal grouping tasks of a project

use chrono::NaiveDate;

use crate::value_objects::{RecordId, TaskCounts};

/// Milestone entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub id: RecordId,
    pub project_id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    /// Denormalized counters, present when the query joined them
    pub task_counts: Option<TaskCounts>,
}

impl Milestone {
    /// Create a new Milestone
    pub fn new(id: RecordId, project_id: RecordId, name: String) -> Self {
        Self {
            id,
            project_id,
            name,
            description: None,
            due_date: None,
            task_counts: None,
        }
    }

    /// Completion in percent, if counters are known
    pub fn progress(&self) -> Option<u8> {
        self.task_counts.map(|c| c.percent_complete())
    }
}
