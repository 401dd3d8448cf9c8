//! Identity provider abstraction: token resolution and phone OTP sessions.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Session, Subject};

/// Failure reported by an [`IdentityProvider`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdentityError {
    /// The provider refused the request (bad token, wrong OTP, ...).
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    /// A success status whose payload lacked the expected shape.
    #[error("{0}")]
    Decode(String),
}

/// Port to the external identity service.
///
/// Tokens are opaque here: validity is decided only by the provider, and
/// every call reaches it (nothing is cached).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves a bearer token to the subject it was issued for.
    ///
    /// # Errors
    ///
    /// [`IdentityError::Rejected`] for expired or unknown tokens,
    /// [`IdentityError::Decode`] when the payload carries no subject id.
    async fn resolve_token(&self, token: &str) -> Result<Subject, IdentityError>;

    /// Sends a one-time passcode to `phone_number`.
    async fn send_otp(&self, phone_number: &str) -> Result<(), IdentityError>;

    /// Exchanges a phone number and OTP for a session.
    async fn verify_otp(&self, phone_number: &str, otp: &str) -> Result<Session, IdentityError>;

    /// Revokes the session the token belongs to.
    async fn sign_out(&self, token: &str) -> Result<(), IdentityError>;

    async fn health_check(&self) -> bool;
}
