//! Signup and signin HTTP handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::error::ApiError;
use crate::models::{SigninRequest, SignupRequest, TokenResponse, UserResponse};
use crate::state::AppState;
use crate::validation::ValidatedJson;

/// POST /signup - Register a new user
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.auth_service.signup(req).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /signin - Exchange email and password for a bearer token
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SigninRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state
        .auth_service
        .signin(&req.email, &req.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
