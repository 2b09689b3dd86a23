//! Note Endpoints

use super::{segment, ApiClient, Method};
use crate::error::ApiResult;
use crate::models::NoteForm;

fn notes_path(project_id: &str, task_id: &str) -> String {
    format!("/projects/{}/tasks/{}/notes", segment(project_id), segment(task_id))
}

impl ApiClient {
    pub async fn create_note(&self, project_id: &str, task_id: &str, form: &NoteForm) -> ApiResult<String> {
        self.message(Method::Post, notes_path(project_id, task_id), Some(form)).await
    }

    pub async fn delete_note(&self, project_id: &str, task_id: &str, note_id: &str) -> ApiResult<String> {
        let path = format!("{}/{}", notes_path(project_id, task_id), segment(note_id));
        self.message::<()>(Method::Delete, path, None).await
    }
}
