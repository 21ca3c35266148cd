//! Audited tables and the feed variant each one maps to

use serde::Serialize;
use std::fmt;

/// Tables whose mutations are captured in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditedTable {
    Tasks,
    TaskAssignees,
    Comments,
    Milestones,
    Files,
    ProjectMembers,
    TaskLabels,
    Users,
    Projects,
    PendingProjectInvitations,
    Labels,
}

impl AuditedTable {
    pub const ALL: [AuditedTable; 11] = [
        Self::Tasks,
        Self::TaskAssignees,
        Self::Comments,
        Self::Milestones,
        Self::Files,
        Self::ProjectMembers,
        Self::TaskLabels,
        Self::Users,
        Self::Projects,
        Self::PendingProjectInvitations,
        Self::Labels,
    ];

    /// Look up a table by its database name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "tasks" => Some(Self::Tasks),
            "task_assignees" => Some(Self::TaskAssignees),
            "comments" => Some(Self::Comments),
            "milestones" => Some(Self::Milestones),
            "files" => Some(Self::Files),
            "project_members" => Some(Self::ProjectMembers),
            "task_labels" => Some(Self::TaskLabels),
            "users" => Some(Self::Users),
            "projects" => Some(Self::Projects),
            "pending_project_invitations" => Some(Self::PendingProjectInvitations),
            "labels" => Some(Self::Labels),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::TaskAssignees => "task_assignees",
            Self::Comments => "comments",
            Self::Milestones => "milestones",
            Self::Files => "files",
            Self::ProjectMembers => "project_members",
            Self::TaskLabels => "task_labels",
            Self::Users => "users",
            Self::Projects => "projects",
            Self::PendingProjectInvitations => "pending_project_invitations",
            Self::Labels => "labels",
        }
    }

    /// The enrichment variant rows of this table carry
    pub fn entry_kind(&self) -> EntryKind {
        match self {
            Self::Tasks => EntryKind::Task,
            Self::TaskAssignees => EntryKind::Assignment,
            Self::Comments => EntryKind::Comment,
            Self::Milestones => EntryKind::Milestone,
            Self::Files => EntryKind::File,
            Self::ProjectMembers => EntryKind::ProjectMember,
            Self::TaskLabels => EntryKind::TaskLabel,
            Self::Users => EntryKind::User,
            Self::Projects | Self::PendingProjectInvitations | Self::Labels => EntryKind::Bare,
        }
    }

    /// Whether rows of this table belong to a single project
    ///
    /// Bare tables are excluded: their project name is attached only when the
    /// caller managed to resolve it.
    pub fn requires_project_name(&self) -> bool {
        !matches!(self.entry_kind(), EntryKind::User | EntryKind::Bare)
    }
}

impl fmt::Display for AuditedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Assignment,
    Comment,
    Milestone,
    File,
    ProjectMember,
    TaskLabel,
    Task,
    User,
    Bare,
}

impl EntryKind {
    /// JSON key holding the payload, `None` for bare entries
    pub fn payload_key(&self) -> Option<&'static str> {
        match self {
            Self::Assignment => Some("assignment"),
            Self::Comment => Some("comment"),
            Self::Milestone => Some("milestone"),
            Self::File => Some("file"),
            Self::ProjectMember => Some("projectMember"),
            Self::TaskLabel => Some("task_label"),
            Self::Task => Some("task"),
            Self::User => Some("user"),
            Self::Bare => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Comment => "comment",
            Self::Milestone => "milestone",
            Self::File => "file",
            Self::ProjectMember => "project_member",
            Self::TaskLabel => "task_label",
            Self::Task => "task",
            Self::User => "user",
            Self::Bare => "bare",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
