//! User route definitions

use axum::{
    routing::{get, patch},
    Router,
};

use crate::handlers::user;
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(user::list_users))
        .route(
            "/users/me",
            get(user::get_current_user).patch(user::update_profile),
        )
        .route("/users/me/avatar", patch(user::update_avatar))
        .route("/users/:id", get(user::get_user))
}
