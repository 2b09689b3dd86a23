//! Auth Endpoints
//!
//! Account lifecycle and the current-user lookup.

use super::{segment, ApiClient, Method};
use crate::error::ApiResult;
use crate::models::{CheckPasswordForm, EmailForm, LoginForm, NewPasswordForm, RegistrationForm, TokenForm, User};

impl ApiClient {
    pub async fn create_account(&self, form: &RegistrationForm) -> ApiResult<String> {
        self.message(Method::Post, "/auth/create-account".into(), Some(form)).await
    }

    pub async fn confirm_account(&self, form: &TokenForm) -> ApiResult<String> {
        self.message(Method::Post, "/auth/confirm-account".into(), Some(form)).await
    }

    pub async fn request_confirmation_code(&self, form: &EmailForm) -> ApiResult<String> {
        self.message(Method::Post, "/auth/request-code".into(), Some(form)).await
    }

    /// Log in and persist the returned token for every later request
    pub async fn login(&self, form: &LoginForm) -> ApiResult<String> {
        let token = self.message(Method::Post, "/auth/login".into(), Some(form)).await?;
        self.storage().set_token(&token);
        log::info!("[API] logged in as {}", form.email);
        Ok(token)
    }

    pub async fn forgot_password(&self, form: &EmailForm) -> ApiResult<String> {
        self.message(Method::Post, "/auth/forgot-password".into(), Some(form)).await
    }

    pub async fn validate_token(&self, form: &TokenForm) -> ApiResult<String> {
        self.message(Method::Post, "/auth/validate-token".into(), Some(form)).await
    }

    pub async fn update_password_with_token(&self, token: &str, form: &NewPasswordForm) -> ApiResult<String> {
        let path = format!("/auth/update-password/{}", segment(token));
        self.message(Method::Post, path, Some(form)).await
    }

    pub async fn get_user(&self) -> ApiResult<User> {
        self.get("/auth/user".into()).await
    }

    pub async fn check_password(&self, form: &CheckPasswordForm) -> ApiResult<String> {
        self.message(Method::Post, "/auth/check-password".into(), Some(form)).await
    }
}
