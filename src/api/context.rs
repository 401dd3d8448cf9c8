//! Per-request identity context.
//!
//! The authorization guard builds a [`RequestContext`] once per protected
//! request and stores it in the request extensions. Handlers receive it as an
//! extractor argument. It is never mutated after construction; public routes
//! see an anonymous context.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::domain::entities::{Principal, Subject};
use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    principal: Option<Principal>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// The resolved principal.
    ///
    /// # Errors
    ///
    /// Returns `401 Unauthorized` when the context is anonymous, which only
    /// happens if a handler that needs an identity is mounted outside the
    /// guarded router.
    pub fn require_principal(&self) -> Result<&Principal, AppError> {
        self.principal.as_ref().ok_or_else(AppError::unauthenticated)
    }

    pub fn require_subject(&self) -> Result<&Subject, AppError> {
        self.require_principal().map(|p| &p.subject)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default())
    }
}
