//! Authorization guard for protected routes.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::api::context::RequestContext;
use crate::{error::AppError, state::AppState};

/// Resolves the caller's bearer token before a protected handler runs.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Parse the `Authorization` header (see [`extract_bearer`])
/// 2. Ask the identity provider to resolve the token
/// 3. Attach a [`RequestContext`] holding the principal to the request
/// 4. Continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` with the message `"Unauthorized"` if the header
/// is missing or malformed (no network call is made), or if the identity
/// provider rejects the token, returns an unusable payload or cannot be
/// reached. The specific cause is logged, never returned.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/tailors", get(list_tailors_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_bearer(req.headers()).map(str::to_owned) else {
        tracing::debug!(path = %req.uri().path(), "missing or malformed Authorization header");
        return Err(AppError::unauthenticated());
    };

    let principal = st.auth_service.authenticate(&token).await?;

    req.extensions_mut()
        .insert(RequestContext::authenticated(principal));

    Ok(next.run(req).await)
}

/// Extracts the credential from `Authorization: Bearer <token>`.
///
/// The header value is split on whitespace and must consist of exactly two
/// parts, the first being `Bearer`. Anything else yields `None`.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}
