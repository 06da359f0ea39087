//! User-related API handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::models::{UpdateAvatarRequest, UpdateProfileRequest, UserResponse};
use crate::services::UserService;
use crate::validation::{ResourceId, ValidatedJson};

/// GET /users
pub async fn list_users(
    State(service): State<Arc<UserService>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    Ok(Json(service.list_users().await?))
}

/// GET /users/:id
pub async fn get_user(
    State(service): State<Arc<UserService>>,
    ResourceId(id): ResourceId,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(service.get_user(id).await?))
}

/// GET /users/me
pub async fn get_current_user(
    State(service): State<Arc<UserService>>,
    user: CurrentUser,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(service.get_user(user.id).await?))
}

/// PATCH /users/me
pub async fn update_profile(
    State(service): State<Arc<UserService>>,
    user: CurrentUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(service.update_profile(user.id, req).await?))
}

/// PATCH /users/me/avatar
pub async fn update_avatar(
    State(service): State<Arc<UserService>>,
    user: CurrentUser,
    ValidatedJson(req): ValidatedJson<UpdateAvatarRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(service.update_avatar(user.id, req).await?))
}
