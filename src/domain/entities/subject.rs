//! Identities resolved by the identity provider.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The authenticated identity behind a bearer token.
///
/// Only `id` is required. Provider fields this service does not model are
/// kept verbatim in `extra` so they round-trip back to callers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Subject {
    /// Subject carrying only an id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            phone: None,
            email: None,
            role: None,
            aud: None,
            extra: Map::new(),
        }
    }
}

/// A subject together with the bearer credential that proved it.
#[derive(Clone, PartialEq)]
pub struct Principal {
    pub subject: Subject,
    pub token: String,
}

impl Principal {
    pub fn new(subject: Subject, token: impl Into<String>) -> Self {
        Self {
            subject,
            token: token.into(),
        }
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("subject", &self.subject)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Session issued after a successful OTP verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: Subject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subject_keeps_unknown_provider_fields() {
        let raw = json!({
            "id": "8d0f",
            "phone": "2348012345678",
            "aud": "authenticated",
            "app_metadata": {"provider": "phone"}
        });

        let subject: Subject = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(subject.id, "8d0f");
        assert_eq!(subject.extra["app_metadata"]["provider"], "phone");
        assert_eq!(serde_json::to_value(&subject).unwrap(), raw);
    }

    #[test]
    fn test_subject_requires_id() {
        assert!(serde_json::from_value::<Subject>(json!({"phone": "1"})).is_err());
    }

    #[test]
    fn test_principal_debug_redacts_token() {
        let principal = Principal::new(Subject::with_id("u1"), "secret-jwt");
        let printed = format!("{principal:?}");

        assert!(printed.contains("u1"));
        assert!(!printed.contains("secret-jwt"));
    }
}
