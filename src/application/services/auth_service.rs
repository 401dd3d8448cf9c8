//! Authentication service: bearer token resolution and phone OTP sign-in.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{Principal, Session};
use crate::domain::repositories::IdentityProvider;
use crate::error::AppError;

/// Service wrapping the identity provider.
pub struct AuthService<P: IdentityProvider + ?Sized> {
    provider: Arc<P>,
}

impl<P: IdentityProvider + ?Sized> AuthService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Resolves a bearer token to the principal it proves.
    ///
    /// Every call reaches the identity provider; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with the generic `"Unauthorized"`
    /// message whatever the cause (rejected token, malformed payload,
    /// unreachable provider). The cause is only logged.
    pub async fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        match self.provider.resolve_token(token).await {
            Ok(subject) => Ok(Principal::new(subject, token)),
            Err(err) => {
                tracing::debug!(error = %err, "bearer token rejected");
                Err(AppError::unauthenticated())
            }
        }
    }

    /// Asks the provider to send an OTP to `phone_number`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] `"Failed to send OTP: ..."`.
    pub async fn send_otp(&self, phone_number: &str) -> Result<(), AppError> {
        self.provider
            .send_otp(phone_number)
            .await
            .map_err(|e| AppError::failed("send OTP", e))
    }

    /// Exchanges a phone number and OTP for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] `"Invalid OTP: ..."`.
    pub async fn verify_otp(&self, phone_number: &str, otp: &str) -> Result<Session, AppError> {
        self.provider
            .verify_otp(phone_number, otp)
            .await
            .map_err(|e| AppError::unauthorized(format!("Invalid OTP: {e}"), Value::Null))
    }

    /// Revokes the principal's session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] `"Failed to sign out: ..."`.
    pub async fn sign_out(&self, principal: &Principal) -> Result<(), AppError> {
        self.provider
            .sign_out(&principal.token)
            .await
            .map_err(|e| AppError::failed("sign out", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Subject;
    use crate::domain::repositories::{IdentityError, MockIdentityProvider};

    fn rejected(message: &str) -> IdentityError {
        IdentityError::Rejected {
            status: 401,
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_resolve_token()
            .withf(|token| token == "valid-token")
            .times(1)
            .returning(|_| Ok(Subject::with_id("subject-1")));

        let service = AuthService::new(Arc::new(provider));
        let principal = service.authenticate("valid-token").await.unwrap();

        assert_eq!(principal.subject.id, "subject-1");
        assert_eq!(principal.token, "valid-token");
    }

    #[tokio::test]
    async fn test_authenticate_collapses_every_failure() {
        for failure in [
            rejected("invalid JWT"),
            IdentityError::Transport("connection refused".into()),
            IdentityError::Decode("missing id".into()),
        ] {
            let mut provider = MockIdentityProvider::new();
            provider
                .expect_resolve_token()
                .times(1)
                .returning(move |_| Err(failure.clone()));

            let service = AuthService::new(Arc::new(provider));
            let err = service.authenticate("token").await.unwrap_err();

            assert!(matches!(err, AppError::Unauthorized { .. }));
            assert_eq!(err.to_string(), "Unauthorized");
        }
    }

    #[tokio::test]
    async fn test_send_otp_failure_is_prefixed() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_send_otp()
            .withf(|phone| phone == "+2348012345678")
            .times(1)
            .returning(|_| Err(rejected("Invalid phone number format")));

        let service = AuthService::new(Arc::new(provider));
        let err = service.send_otp("+2348012345678").await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to send OTP: Invalid phone number format"
        );
    }

    #[tokio::test]
    async fn test_verify_otp_failure_is_unauthorized() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_verify_otp()
            .times(1)
            .returning(|_, _| Err(rejected("Token has expired or is invalid")));

        let service = AuthService::new(Arc::new(provider));
        let err = service
            .verify_otp("+2348012345678", "123456")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
        assert_eq!(err.to_string(), "Invalid OTP: Token has expired or is invalid");
    }

    #[tokio::test]
    async fn test_sign_out_uses_principal_token() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_sign_out()
            .withf(|token| token == "session-jwt")
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(provider));
        let principal = Principal::new(Subject::with_id("subject-1"), "session-jwt");

        assert!(service.sign_out(&principal).await.is_ok());
    }
}
