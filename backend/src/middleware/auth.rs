//! Authentication middleware
//!
//! `require_auth` guards every protected route: it verifies the bearer token
//! and leaves the caller's identity in the request extensions, where the
//! [`CurrentUser`] extractor picks it up.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use uuid::Uuid;

use crate::auth::AUTH_REQUIRED_MESSAGE;
use crate::error::ApiError;
use crate::state::AppState;

/// Identity of the authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Uuid,
}

/// Reject the request unless it carries a valid bearer token
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(Authorization(bearer)) = request.headers().typed_get::<Authorization<Bearer>>()
    else {
        tracing::debug!(path = %request.uri().path(), "Missing or malformed bearer token");
        return Err(ApiError::Unauthorized(AUTH_REQUIRED_MESSAGE.to_string()));
    };

    let id = state.auth_service.verify(bearer.token())?;

    request.extensions_mut().insert(CurrentUser { id });

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by [`require_auth`]
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(user: CurrentUser) -> impl IntoResponse {
///     format!("Hello, user {}", user.id)
/// }
/// ```
#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or_else(|| ApiError::Unauthorized(AUTH_REQUIRED_MESSAGE.to_string()))
    }
}
