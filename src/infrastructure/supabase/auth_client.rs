//! GoTrue implementation of [`IdentityProvider`].

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use super::upstream_message;
use crate::domain::entities::{Session, Subject};
use crate::domain::repositories::{IdentityError, IdentityProvider};

/// Client for `{SUPABASE_URL}/auth/v1`.
#[derive(Debug, Clone)]
pub struct SupabaseAuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl SupabaseAuthClient {
    pub(super) fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    async fn send(request: RequestBuilder) -> Result<Response, IdentityError> {
        let response = request
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(IdentityError::Rejected {
            status: status.as_u16(),
            message: upstream_message(status, &body),
        })
    }

    async fn json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, IdentityError> {
        Self::send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| IdentityError::Decode(e.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for SupabaseAuthClient {
    async fn resolve_token(&self, token: &str) -> Result<Subject, IdentityError> {
        let request = self.http.get(self.url("user")).bearer_auth(token);
        let subject: Subject = Self::json(request).await?;

        if subject.id.trim().is_empty() {
            return Err(IdentityError::Decode("user payload has an empty id".into()));
        }

        Ok(subject)
    }

    async fn send_otp(&self, phone_number: &str) -> Result<(), IdentityError> {
        debug!("requesting sms otp");
        let request = self
            .http
            .post(self.url("otp"))
            .json(&json!({ "phone": phone_number }));

        Self::send(request).await.map(|_| ())
    }

    async fn verify_otp(&self, phone_number: &str, otp: &str) -> Result<Session, IdentityError> {
        let request = self.http.post(self.url("verify")).json(&json!({
            "phone": phone_number,
            "token": otp,
            "type": "sms",
        }));

        Self::json(request).await
    }

    async fn sign_out(&self, token: &str) -> Result<(), IdentityError> {
        let request = self.http.post(self.url("logout")).bearer_auth(token);
        Self::send(request).await.map(|_| ())
    }

    async fn health_check(&self) -> bool {
        match self.http.get(self.url("health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "identity provider health check failed");
                false
            }
        }
    }
}
