//! Backend API Client
//!
//! One async method per backend endpoint, organized by domain. Every request
//! goes through [`ApiClient::execute`], which attaches the stored bearer
//! token and turns non-2xx responses into [`ApiError`]s.

mod auth;
mod note;
mod profile;
mod project;
mod storage;
mod task;
mod team;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::schema::{self, Validate};

pub use storage::{LocalTokenStorage, MemoryTokenStorage, TokenStorage, AUTH_TOKEN_KEY};
pub use transport::HttpTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Outgoing request, relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response; `body` is the undecoded text
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves a request over the wire. `Err` means no response arrived at all.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String>;
}

/// Path segment encoding: everything but unreserved characters
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) fn segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Shared API client. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    storage: Arc<dyn TokenStorage>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, storage: Arc<dyn TokenStorage>) -> Self {
        Self { transport, storage }
    }

    /// Client for the browser: fetch-backed transport and `localStorage` token
    pub fn browser(base_url: &str) -> Self {
        Self::new(Arc::new(HttpTransport::new(base_url)), Arc::new(LocalTokenStorage))
    }

    pub fn storage(&self) -> &dyn TokenStorage {
        self.storage.as_ref()
    }

    pub fn has_token(&self) -> bool {
        self.storage.token().is_some()
    }

    /// Forget the stored credential
    pub fn logout(&self) {
        log::info!("[API] logout, clearing stored token");
        self.storage.clear_token();
    }

    /// The single request interceptor: attach the bearer token if one is stored
    fn intercept(&self, mut request: ApiRequest) -> ApiRequest {
        if let Some(token) = self.storage.token() {
            request.headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        request
    }

    async fn execute(&self, method: Method, path: String, body: Option<serde_json::Value>) -> ApiResult<String> {
        let mut request = ApiRequest::new(method, path);
        request.body = body;
        let request = self.intercept(request);

        log::debug!("[API] {:?} {}", request.method, request.path);
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("[API] transport failure: {}", e);
            ApiError::Network(e)
        })?;

        if response.is_success() {
            Ok(response.body)
        } else {
            let err = ApiError::from_response(response.status, &response.body);
            log::warn!("[API] status {}: {}", response.status, err);
            Err(err)
        }
    }

    fn encode<B: Serialize>(body: &B) -> ApiResult<serde_json::Value> {
        serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
    }

    /// Call an endpoint whose answer is opaque confirmation text
    pub(crate) async fn message<B: Serialize>(&self, method: Method, path: String, body: Option<&B>) -> ApiResult<String> {
        let body = body.map(Self::encode).transpose()?;
        let raw = self.execute(method, path, body).await?;
        Ok(schema::parse_message(&raw))
    }

    /// Call an endpoint whose answer must match `T`
    pub(crate) async fn entity<T, B>(&self, method: Method, path: String, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned + Validate,
        B: Serialize,
    {
        let body = body.map(Self::encode).transpose()?;
        let raw = self.execute(method, path, body).await?;
        schema::parse(&raw).map_err(|e| {
            log::warn!("[API] response rejected: {}", e);
            e
        })
    }

    pub(crate) async fn get<T: DeserializeOwned + Validate>(&self, path: String) -> ApiResult<T> {
        self.entity::<T, ()>(Method::Get, path, None).await
    }
}
