//! Team Endpoints

use super::{segment, ApiClient, Method};
use crate::error::ApiResult;
use crate::models::{EmailForm, MemberIdBody, TeamMember};

fn team_path(project_id: &str) -> String {
    format!("/projects/{}/team", segment(project_id))
}

impl ApiClient {
    /// Look up a registered user by email before adding them
    pub async fn find_member_by_email(&self, project_id: &str, form: &EmailForm) -> ApiResult<TeamMember> {
        let path = format!("{}/find", team_path(project_id));
        self.entity(Method::Post, path, Some(form)).await
    }

    pub async fn get_project_team(&self, project_id: &str) -> ApiResult<Vec<TeamMember>> {
        self.get(team_path(project_id)).await
    }

    pub async fn add_member(&self, project_id: &str, user_id: &str) -> ApiResult<String> {
        self.message(Method::Post, team_path(project_id), Some(&MemberIdBody { id: user_id })).await
    }

    pub async fn remove_member(&self, project_id: &str, user_id: &str) -> ApiResult<String> {
        let path = format!("{}/{}", team_path(project_id), segment(user_id));
        self.message::<()>(Method::Delete, path, None).await
    }
}
