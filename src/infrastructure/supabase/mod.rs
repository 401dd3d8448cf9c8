//! Supabase-backed implementations of the domain ports.
//!
//! One [`reqwest::Client`] is built at startup and shared by the REST
//! (PostgREST) and Auth (GoTrue) sub-clients, so both draw from the same
//! connection pool and obey the same request timeout. Every request carries
//! the project's `apikey` header. Nothing is retried: a timeout surfaces as a
//! transport error.

mod auth_client;
mod rest_client;

use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

pub use auth_client::SupabaseAuthClient;
pub use rest_client::SupabaseRestClient;

/// Connection settings for a Supabase project.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`.
    pub url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Entry point owning the shared HTTP client.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    rest: SupabaseRestClient,
    auth: SupabaseAuthClient,
}

impl SupabaseClient {
    /// Builds the shared HTTP client and both sub-clients.
    ///
    /// # Errors
    ///
    /// Fails if the API key is not a valid header value or the TLS backend
    /// cannot be initialised.
    pub fn new(config: &SupabaseConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.api_key)
                .context("SUPABASE_KEY contains characters not allowed in a header")?,
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        let base_url = config.url.trim_end_matches('/').to_string();

        Ok(Self {
            rest: SupabaseRestClient::new(http.clone(), base_url.clone(), config.api_key.clone()),
            auth: SupabaseAuthClient::new(http, base_url),
        })
    }

    pub fn rest(&self) -> SupabaseRestClient {
        self.rest.clone()
    }

    pub fn auth(&self) -> SupabaseAuthClient {
        self.auth.clone()
    }
}

/// Pulls a human readable message out of an error body.
///
/// GoTrue uses `msg` or `error_description`, PostgREST uses `message`.
/// Falls back to the raw body, then to the status line.
fn upstream_message(status: reqwest::StatusCode, body: &str) -> String {
    const KEYS: [&str; 4] = ["msg", "message", "error_description", "error"];

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in KEYS {
            if let Some(Value::String(message)) = map.get(key) {
                return message.clone();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_upstream_message_prefers_msg() {
        let body = r#"{"code":401,"msg":"invalid JWT","error":"unauthorized"}"#;
        assert_eq!(upstream_message(StatusCode::UNAUTHORIZED, body), "invalid JWT");
    }

    #[test]
    fn test_upstream_message_reads_postgrest_shape() {
        let body = r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value violates unique constraint \"tailors_pkey\""}"#;
        assert_eq!(
            upstream_message(StatusCode::CONFLICT, body),
            "duplicate key value violates unique constraint \"tailors_pkey\""
        );
    }

    #[test]
    fn test_upstream_message_falls_back_to_body_then_status() {
        assert_eq!(upstream_message(StatusCode::BAD_GATEWAY, "upstream down"), "upstream down");
        assert_eq!(
            upstream_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "503 Service Unavailable"
        );
    }

    #[test]
    fn test_config_debug_hides_key() {
        let config = SupabaseConfig {
            url: "https://demo.supabase.co".into(),
            api_key: "service-role-secret".into(),
            timeout: Duration::from_secs(10),
        };
        assert!(!format!("{config:?}").contains("service-role-secret"));
    }
}
