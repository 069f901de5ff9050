//! REST client for the hospital backend.

use std::fmt;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared_types::{
    AdminLoginResponse, CreateUserRequest, ErrorBody, LoginRequest, MessageResponse, Portal,
    RegistrationRequest, ResendVerificationRequest, StaffLoginResponse, UpdateUserRequest,
    UserListResponse, UserQuery, VerifyEmailRequest, VerifyEmailResponse,
};

use crate::config::ClientConfig;

/// Transport-level failure of a backend call, before any screen-specific
/// message mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    Network(String),
    /// Non-2xx status with a JSON error body (possibly empty).
    Status { status: u16, body: ErrorBody },
    /// The response was not declared as JSON.
    NotJson { status: u16 },
    /// Declared JSON that did not parse into the expected shape.
    Malformed(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } | ApiError::NotJson { status } => Some(*status),
            ApiError::Network(_) | ApiError::Malformed(_) => None,
        }
    }

    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "request failed: {e}"),
            ApiError::Status { status, body } => match body.detail() {
                Some(detail) => write!(f, "backend returned {status}: {detail}"),
                None => write!(f, "backend returned {status}"),
            },
            ApiError::NotJson { status } => write!(f, "backend returned non-JSON ({status})"),
            ApiError::Malformed(e) => write!(f, "malformed response: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

pub fn login_endpoint(portal: Portal) -> &'static str {
    match portal {
        Portal::Admin => "/api/admin/login",
        Portal::User => "/api/auth/login",
    }
}

pub fn logout_endpoint(portal: Portal) -> &'static str {
    match portal {
        Portal::Admin => "/api/admin/logout",
        Portal::User => "/api/auth/logout",
    }
}

/// One shared HTTP client bound to the configured backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // --- Onboarding ---

    #[tracing::instrument(skip(self, body), fields(email = %body.admin_data.email))]
    pub async fn register_hospital(
        &self,
        body: &RegistrationRequest,
    ) -> Result<MessageResponse, ApiError> {
        let request = self
            .http
            .post(self.url("/api/hospital/register-with-verification"))
            .json(body);
        self.send_json(request).await
    }

    #[tracing::instrument(skip(self, body), fields(email = %body.email))]
    pub async fn verify_email(
        &self,
        body: &VerifyEmailRequest,
    ) -> Result<VerifyEmailResponse, ApiError> {
        let request = self
            .http
            .post(self.url("/api/hospital/verify-email"))
            .json(body);
        self.send_json(request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn resend_verification(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let body = ResendVerificationRequest {
            email: email.to_string(),
        };
        let request = self
            .http
            .post(self.url("/api/hospital/resend-verification"))
            .json(&body);
        self.send_json(request).await
    }

    // --- Authentication ---

    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn admin_login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<AdminLoginResponse, ApiError> {
        let request = self
            .http
            .post(self.url(login_endpoint(Portal::Admin)))
            .json(credentials);
        self.send_json(request).await
    }

    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn staff_login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<StaffLoginResponse, ApiError> {
        let request = self
            .http
            .post(self.url(login_endpoint(Portal::User)))
            .json(credentials);
        self.send_json(request).await
    }

    /// Only the status matters; the body is ignored.
    #[tracing::instrument(skip(self, token))]
    pub async fn logout(&self, portal: Portal, token: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(logout_endpoint(portal)))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: ErrorBody::default(),
            });
        }
        Ok(())
    }

    // --- User management ---

    #[tracing::instrument(skip(self, token))]
    pub async fn list_users(
        &self,
        token: &str,
        query: &UserQuery,
    ) -> Result<UserListResponse, ApiError> {
        let request = self
            .http
            .get(self.url("/api/users"))
            .bearer_auth(token)
            .query(&query.to_params());
        self.send_json(request).await
    }

    #[tracing::instrument(skip(self, token, body), fields(email = %body.email))]
    pub async fn create_user(
        &self,
        token: &str,
        body: &CreateUserRequest,
    ) -> Result<MessageResponse, ApiError> {
        let request = self
            .http
            .post(self.url("/api/users"))
            .bearer_auth(token)
            .json(body);
        self.send_json(request).await
    }

    #[tracing::instrument(skip(self, token, body))]
    pub async fn update_user(
        &self,
        token: &str,
        id: &str,
        body: &UpdateUserRequest,
    ) -> Result<MessageResponse, ApiError> {
        let request = self
            .http
            .put(self.url(&format!("/api/users/{id}")))
            .bearer_auth(token)
            .json(body);
        self.send_json(request).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete_user(&self, token: &str, id: &str) -> Result<MessageResponse, ApiError> {
        let request = self
            .http
            .delete(self.url(&format!("/api/users/{id}")))
            .bearer_auth(token);
        self.send_json(request).await
    }

    /// Send and decode. The content type is checked before the status so an
    /// HTML error page from a proxy is reported as a format problem.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if text.trim().is_empty() {
            if status.is_success() {
                return serde_json::from_str("{}").map_err(|e| ApiError::Malformed(e.to_string()));
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: ErrorBody::default(),
            });
        }

        if !is_json {
            tracing::warn!(status = status.as_u16(), "backend returned a non-JSON body");
            return Err(ApiError::NotJson {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or_default();
            tracing::debug!(status = status.as_u16(), error = ?body.code(), "backend rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(error = %e, "response did not match the expected shape");
            ApiError::Malformed(e.to_string())
        })
    }
}
