//! Response Schemas
//!
//! Deserializing into the model types checks structure (required fields,
//! field types, the status enum). `Validate` adds the checks serde can't
//! express. Unknown fields are ignored.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::models::{Note, Project, ProjectDraft, ProjectSummary, StatusChange, Task, User};

/// Semantic checks run after a payload deserializes
pub trait Validate {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, item)| item.validate().map_err(|e| format!("[{}]: {}", i, e)))
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), String> {
        if is_email(&self.email) {
            Ok(())
        } else {
            Err(format!("invalid email `{}`", self.email))
        }
    }
}

impl Validate for Note {
    fn validate(&self) -> Result<(), String> {
        self.created_by.validate()
    }
}

impl Validate for StatusChange {
    fn validate(&self) -> Result<(), String> {
        self.user.validate()
    }
}

impl Validate for Task {
    fn validate(&self) -> Result<(), String> {
        self.completed_by.validate()?;
        self.notes.validate()
    }
}

impl Validate for Project {}
impl Validate for ProjectSummary {}
impl Validate for ProjectDraft {}

/// Parse a response body against the declared shape
pub fn parse<T: DeserializeOwned + Validate>(body: &str) -> ApiResult<T> {
    let value: T = serde_json::from_str(body).map_err(|e| ApiError::Validation(e.to_string()))?;
    value.validate().map_err(ApiError::Validation)?;
    Ok(value)
}

/// Opaque confirmation text. Most endpoints send a JSON string; anything
/// else is handed back as-is.
pub fn parse_message(body: &str) -> String {
    serde_json::from_str::<String>(body).unwrap_or_else(|_| body.to_string())
}

/// Loose syntactic email check: `local@domain.tld`, no whitespace
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else { return false };
    if local.is_empty() || value.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    #[test]
    fn test_project_list_missing_id_is_rejected() {
        let body = r#"[{"projectName":"Site","clientName":"ACME","description":"","manager":"u1"}]"#;
        let result = parse::<Vec<ProjectSummary>>(body);
        assert!(matches!(result, Err(ApiError::Validation(msg)) if msg.contains("_id")));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = r#"{"_id":"u1","name":"Ana","email":"ana@example.com","password":"x","__v":0}"#;
        let user = parse::<User>(body).unwrap();
        assert_eq!(user.id, "u1");
    }

    #[test]
    fn test_bad_email_fails_validation() {
        let body = r#"{"_id":"u1","name":"Ana","email":"not-an-email"}"#;
        assert!(matches!(parse::<User>(body), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_unknown_status_fails() {
        let body = r#"{"_id":"p1","projectName":"Site","clientName":"ACME","description":"",
            "manager":"u1","team":[],
            "tasks":[{"_id":"t1","name":"a","description":"","status":"archived"}]}"#;
        assert!(matches!(parse::<Project>(body), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_task_with_notes_and_history() {
        let body = r#"{
            "_id":"t1","name":"Login page","description":"Build it","project":"p1",
            "status":"inProgress",
            "completedBy":[{"_id":"c1","user":{"_id":"u1","name":"Ana","email":"ana@example.com"},"status":"inProgress"}],
            "notes":[{"_id":"n1","content":"started","task":"t1","createdAt":"2026-10-19T10:00:00.000Z",
                      "createdBy":{"_id":"u1","name":"Ana","email":"ana@example.com"}}],
            "createdAt":"2026-10-18T10:00:00.000Z","updatedAt":"2026-10-19T10:00:00.000Z"
        }"#;
        let task = parse::<Task>(body).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.notes[0].created_by.name, "Ana");
        assert_eq!(task.completed_by.len(), 1);
    }

    #[test]
    fn test_parse_message() {
        assert_eq!(parse_message(r#""Project created""#), "Project created");
        assert_eq!(parse_message("plain text"), "plain text");
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("ana@example.com"));
        assert!(!is_email("ana@example"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("ana example@x.com"));
    }
}
