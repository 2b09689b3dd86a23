//! Frontend Models
//!
//! Data structures matching backend entities, plus the request bodies the
//! API client sends. Field names follow the backend's JSON.

use serde::{Deserialize, Serialize};

/// Task lifecycle status. Serialized as the backend's camelCase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Pending,
    OnHold,
    InProgress,
    UnderReview,
    Completed,
}

impl TaskStatus {
    /// All statuses in board column order
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Pending,
        TaskStatus::OnHold,
        TaskStatus::InProgress,
        TaskStatus::UnderReview,
        TaskStatus::Completed,
    ];

    /// Wire name, also used as the DOM key for the column
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::OnHold => "onHold",
            TaskStatus::InProgress => "inProgress",
            TaskStatus::UnderReview => "underReview",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::OnHold => "On Hold",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::UnderReview => "Under Review",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Authenticated user projection (no password or token fields)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Team members share the user projection
pub type TeamMember = User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(rename = "createdBy")]
    pub created_by: User,
    pub task: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// One entry of a task's status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: User,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub project: String,
    pub status: TaskStatus,
    #[serde(rename = "completedBy")]
    pub completed_by: Vec<StatusChange>,
    pub notes: Vec<Note>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Task as embedded in a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub description: String,
    /// User id of the manager
    pub manager: String,
    pub tasks: Vec<TaskSummary>,
    /// User ids of team members
    pub team: Vec<String>,
}

impl Project {
    /// Set one task's status, leaving every other task untouched.
    /// Returns the previous status, or `None` if the task is not in this project.
    pub fn set_task_status(&mut self, task_id: &str, status: TaskStatus) -> Option<TaskStatus> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .map(|task| std::mem::replace(&mut task.status, status))
    }

    pub fn task_status(&self, task_id: &str) -> Option<TaskStatus> {
        self.tasks.iter().find(|task| task.id == task_id).map(|task| task.status)
    }
}

/// Dashboard list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub description: String,
    pub manager: String,
}

/// Edit-view projection of a project. Also the create/update request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub description: String,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Body for request-code, forgot-password and team lookup
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmailForm {
    pub email: String,
}

/// Six-digit confirmation or reset token
#[derive(Debug, Clone, Default, Serialize)]
pub struct TokenForm {
    pub token: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewPasswordForm {
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckPasswordForm {
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskForm {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NoteForm {
    pub content: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct StatusBody {
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct MemberIdBody<'a> {
    pub id: &'a str,
}

/// Only the project manager may edit the project and its tasks
pub fn can_edit(manager_id: &str, user: &User) -> bool {
    manager_id == user.id
}

/// Notes are deletable by their author only
pub fn can_delete_note(note: &Note, user: &User) -> bool {
    note.created_by.id == user.id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, status: TaskStatus) -> TaskSummary {
        TaskSummary {
            id: id.to_string(),
            name: format!("Task {}", id),
            description: String::new(),
            status,
        }
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&TaskStatus::UnderReview).unwrap();
        assert_eq!(json, r#""underReview""#);
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_wire(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::from_wire("archived"), None);
        assert!(serde_json::from_str::<TaskStatus>(r#""archived""#).is_err());
    }

    #[test]
    fn test_set_task_status_touches_one_task() {
        let mut project = Project {
            id: "p1".into(),
            project_name: "Site".into(),
            client_name: "ACME".into(),
            description: String::new(),
            manager: "u1".into(),
            tasks: vec![summary("a", TaskStatus::Pending), summary("b", TaskStatus::Pending)],
            team: vec![],
        };

        assert_eq!(project.set_task_status("b", TaskStatus::Completed), Some(TaskStatus::Pending));
        assert_eq!(project.task_status("a"), Some(TaskStatus::Pending));
        assert_eq!(project.task_status("b"), Some(TaskStatus::Completed));
        assert_eq!(project.set_task_status("zzz", TaskStatus::OnHold), None);
    }

    #[test]
    fn test_permissions() {
        let user = User { id: "u1".into(), name: "Ana".into(), email: "ana@example.com".into() };
        let other = User { id: "u2".into(), ..user.clone() };
        assert!(can_edit("u1", &user));
        assert!(!can_edit("u1", &other));

        let note = Note {
            id: "n1".into(),
            content: "hi".into(),
            created_by: user.clone(),
            task: "t1".into(),
            created_at: "2026-10-19T10:00:00.000Z".into(),
        };
        assert!(can_delete_note(&note, &user));
        assert!(!can_delete_note(&note, &other));
    }
}
