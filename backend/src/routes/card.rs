//! Card route definitions

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::handlers::card;
use crate::state::AppState;

pub fn card_routes() -> Router<AppState> {
    Router::new()
        .route("/cards", get(card::list_cards).post(card::create_card))
        .route("/cards/:card_id", delete(card::delete_card))
        .route(
            "/cards/:card_id/likes",
            put(card::like_card).delete(card::dislike_card),
        )
}
