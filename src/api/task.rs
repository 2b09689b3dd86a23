//! Task Endpoints

use super::{segment, ApiClient, Method};
use crate::error::ApiResult;
use crate::models::{StatusBody, Task, TaskForm, TaskStatus};

fn task_path(project_id: &str, task_id: &str) -> String {
    format!("/projects/{}/tasks/{}", segment(project_id), segment(task_id))
}

impl ApiClient {
    pub async fn create_task(&self, project_id: &str, form: &TaskForm) -> ApiResult<String> {
        let path = format!("/projects/{}/tasks", segment(project_id));
        self.message(Method::Post, path, Some(form)).await
    }

    /// `Ok(None)` without touching the network when no task is selected
    pub async fn get_task_by_id(&self, project_id: &str, task_id: &str) -> ApiResult<Option<Task>> {
        if task_id.is_empty() {
            return Ok(None);
        }
        self.get(task_path(project_id, task_id)).await.map(Some)
    }

    pub async fn update_task(&self, project_id: &str, task_id: &str, form: &TaskForm) -> ApiResult<String> {
        self.message(Method::Put, task_path(project_id, task_id), Some(form)).await
    }

    pub async fn delete_task(&self, project_id: &str, task_id: &str) -> ApiResult<String> {
        self.message::<()>(Method::Delete, task_path(project_id, task_id), None).await
    }

    pub async fn update_status(&self, project_id: &str, task_id: &str, status: TaskStatus) -> ApiResult<String> {
        let path = format!("{}/status", task_path(project_id, task_id));
        self.message(Method::Post, path, Some(&StatusBody { status })).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::{client_with, MockTransport};
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_task_id_issues_no_call() {
        let transport = MockTransport::new();
        let client = client_with(&transport);

        assert_eq!(client.get_task_by_id("p1", "").await, Ok(None));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_task_by_id() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"_id":"t1","name":"Design","description":"","project":"p1","status":"onHold",
            "completedBy":[],"notes":[],"createdAt":"2026-10-19T10:00:00Z","updatedAt":"2026-10-19T10:00:00Z"}"#);
        let client = client_with(&transport);

        let task = client.get_task_by_id("p1", "t1").await.unwrap().unwrap();
        assert_eq!(task.status, TaskStatus::OnHold);
        assert_eq!(transport.last_request().path, "/projects/p1/tasks/t1");
    }

    #[tokio::test]
    async fn test_update_status_body() {
        let transport = MockTransport::new();
        transport.respond(200, r#""Status updated""#);
        let client = client_with(&transport);

        let msg = client.update_status("p1", "t1", TaskStatus::UnderReview).await.unwrap();

        assert_eq!(msg, "Status updated");
        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/projects/p1/tasks/t1/status");
        assert_eq!(request.body, Some(json!({"status": "underReview"})));
    }

    #[tokio::test]
    async fn test_task_crud_paths() {
        let transport = MockTransport::new();
        for _ in 0..3 {
            transport.respond(200, r#""ok""#);
        }
        let client = client_with(&transport);
        let form = TaskForm { name: "Design".into(), description: "Mockups".into() };

        client.create_task("p1", &form).await.unwrap();
        client.update_task("p1", "t1", &form).await.unwrap();
        client.delete_task("p1", "t1").await.unwrap();

        let calls: Vec<_> = transport.requests().into_iter().map(|r| (r.method, r.path)).collect();
        assert_eq!(
            calls,
            vec![
                (Method::Post, "/projects/p1/tasks".to_string()),
                (Method::Put, "/projects/p1/tasks/t1".to_string()),
                (Method::Delete, "/projects/p1/tasks/t1".to_string()),
            ]
        );
    }
}
