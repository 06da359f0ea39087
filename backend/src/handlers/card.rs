//! Card-related API handlers

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::models::{Card, CreateCardRequest};
use crate::services::CardService;
use crate::validation::{ResourceId, ValidatedJson};

/// GET /cards
pub async fn list_cards(
    State(service): State<Arc<CardService>>,
) -> Result<Json<Vec<Card>>, ApiError> {
    Ok(Json(service.list_cards().await?))
}

/// POST /cards - Create a card owned by the caller
pub async fn create_card(
    State(service): State<Arc<CardService>>,
    user: CurrentUser,
    ValidatedJson(req): ValidatedJson<CreateCardRequest>,
) -> Result<(StatusCode, Json<Card>), ApiError> {
    let card = service.create_card(user.id, req).await?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// DELETE /cards/:card_id - Owner-only delete
pub async fn delete_card(
    State(service): State<Arc<CardService>>,
    user: CurrentUser,
    ResourceId(card_id): ResourceId,
) -> Result<Json<Card>, ApiError> {
    Ok(Json(service.delete_card(card_id, user.id).await?))
}

/// PUT /cards/:card_id/likes
pub async fn like_card(
    State(service): State<Arc<CardService>>,
    user: CurrentUser,
    ResourceId(card_id): ResourceId,
) -> Result<Json<Card>, ApiError> {
    Ok(Json(service.like_card(card_id, user.id).await?))
}

/// DELETE /cards/:card_id/likes
pub async fn dislike_card(
    State(service): State<Arc<CardService>>,
    user: CurrentUser,
    ResourceId(card_id): ResourceId,
) -> Result<Json<Card>, ApiError> {
    Ok(Json(service.dislike_card(card_id, user.id).await?))
}
