//! Project Endpoints

use super::{segment, ApiClient, Method};
use crate::error::ApiResult;
use crate::models::{CheckPasswordForm, Project, ProjectDraft, ProjectSummary};

impl ApiClient {
    pub async fn create_project(&self, form: &ProjectDraft) -> ApiResult<String> {
        self.message(Method::Post, "/projects".into(), Some(form)).await
    }

    pub async fn list_projects(&self) -> ApiResult<Vec<ProjectSummary>> {
        self.get("/projects".into()).await
    }

    /// Edit-view projection
    pub async fn get_project(&self, id: &str) -> ApiResult<ProjectDraft> {
        self.get(format!("/projects/{}", segment(id))).await
    }

    /// Full project including its tasks and team
    pub async fn get_full_project(&self, id: &str) -> ApiResult<Project> {
        self.get(format!("/projects/{}", segment(id))).await
    }

    pub async fn update_project(&self, id: &str, form: &ProjectDraft) -> ApiResult<String> {
        self.message(Method::Put, format!("/projects/{}", segment(id)), Some(form)).await
    }

    pub async fn delete_project(&self, id: &str) -> ApiResult<String> {
        self.message::<()>(Method::Delete, format!("/projects/{}", segment(id)), None).await
    }

    /// Re-check the user's password, then delete. A wrong password stops
    /// before the delete is sent.
    pub async fn delete_project_with_password(&self, id: &str, form: &CheckPasswordForm) -> ApiResult<String> {
        self.check_password(form).await?;
        self.delete_project(id).await
    }
}
