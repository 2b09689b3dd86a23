//! Profile Endpoints

use super::{ApiClient, Method};
use crate::error::ApiResult;
use crate::models::{ChangePasswordForm, ProfileForm};

impl ApiClient {
    pub async fn update_profile(&self, form: &ProfileForm) -> ApiResult<String> {
        self.message(Method::Put, "/auth/profile".into(), Some(form)).await
    }

    pub async fn change_password(&self, form: &ChangePasswordForm) -> ApiResult<String> {
        self.message(Method::Post, "/auth/update-password".into(), Some(form)).await
    }
}
