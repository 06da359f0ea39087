//! API handlers for the Around backend

pub mod auth;
pub mod card;
pub mod health;
pub mod user;

use crate::error::ApiError;

/// Fallback for any route the router does not know
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Requested resource not found".to_string())
}
