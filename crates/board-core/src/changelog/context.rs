//! Joined context attached to audit rows for display
//!
//! Every payload is a flat record of human-readable fields the query layer
//! resolved from foreign keys in the raw row.

use serde::{Deserialize, Serialize};

use super::EntryKind;
use crate::value_objects::RecordId;

/// Task assignee added or removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDetails {
    pub user_id: RecordId,
    pub user_name: String,
    pub user_email: String,
    pub task_title: String,
}

/// Comment posted on a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDetails {
    pub user_id: RecordId,
    pub user_name: String,
    pub user_email: String,
    pub comment: String,
    pub task_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneDetails {
    pub milestone_name: String,
}

/// Uploaded file, optionally attached to a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDetails {
    pub file_name: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMemberDetails {
    pub user_id: RecordId,
    pub user_name: String,
    pub user_email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLabelDetails {
    pub label_name: String,
    pub label_color: String,
    pub task_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    pub task_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub user_name: String,
    pub user_email: String,
}

/// Side-loaded context for one audit row
///
/// Serialized externally tagged with the same keys a feed entry uses, e.g.
/// `{"projectMember": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrichmentContext {
    #[serde(rename = "assignment")]
    Assignment(AssignmentDetails),
    #[serde(rename = "comment")]
    Comment(CommentDetails),
    #[serde(rename = "milestone")]
    Milestone(MilestoneDetails),
    #[serde(rename = "file")]
    File(FileDetails),
    #[serde(rename = "projectMember")]
    ProjectMember(ProjectMemberDetails),
    #[serde(rename = "task_label")]
    TaskLabel(TaskLabelDetails),
    #[serde(rename = "task")]
    Task(TaskDetails),
    #[serde(rename = "user")]
    User(UserDetails),
}

impl EnrichmentContext {
    /// Variant this payload fills
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Assignment(_) => EntryKind::Assignment,
            Self::Comment(_) => EntryKind::Comment,
            Self::Milestone(_) => EntryKind::Milestone,
            Self::File(_) => EntryKind::File,
            Self::ProjectMember(_) => EntryKind::ProjectMember,
            Self::TaskLabel(_) => EntryKind::TaskLabel,
            Self::Task(_) => EntryKind::Task,
            Self::User(_) => EntryKind::User,
        }
    }

    /// Short human-readable subject line for the feed
    pub fn subject(&self) -> &str {
        match self {
            Self::Assignment(d) => &d.task_title,
            Self::Comment(d) => &d.task_title,
            Self::Milestone(d) => &d.milestone_name,
            Self::File(d) => &d.file_name,
            Self::ProjectMember(d) => &d.user_name,
            Self::TaskLabel(d) => &d.label_name,
            Self::Task(d) => &d.task_title,
            Self::User(d) => &d.user_name,
        }
    }
}

impl From<AssignmentDetails> for EnrichmentContext {
    fn from(details: AssignmentDetails) -> Self {
        Self::Assignment(details)
    }
}

impl From<CommentDetails> for EnrichmentContext {
    fn from(details: CommentDetails) -> Self {
        Self::Comment(details)
    }
}

impl From<MilestoneDetails> for EnrichmentContext {
    fn from(details: MilestoneDetails) -> Self {
        Self::Milestone(details)
    }
}

impl From<FileDetails> for EnrichmentContext {
    fn from(details: FileDetails) -> Self {
        Self::File(details)
    }
}

impl From<ProjectMemberDetails> for EnrichmentContext {
    fn from(details: ProjectMemberDetails) -> Self {
        Self::ProjectMember(details)
    }
}

impl From<TaskLabelDetails> for EnrichmentContext {
    fn from(details: TaskLabelDetails) -> Self {
        Self::TaskLabel(details)
    }
}

impl From<TaskDetails> for EnrichmentContext {
    fn from(details: TaskDetails) -> Self {
        Self::Task(details)
    }
}

impl From<UserDetails> for EnrichmentContext {
    fn from(details: UserDetails) -> Self {
        Self::User(details)
    }
}
