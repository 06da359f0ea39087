//! Route definitions and the request pipeline

mod auth;
mod card;
mod user;

pub use auth::auth_routes;
pub use card::card_routes;
pub use user::user_routes;

use axum::{middleware, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::handlers::{health::health_check, not_found};
use crate::middleware::{
    handle_panic, hsts_header, request_tracing, require_auth, security_headers,
};
use crate::state::AppState;

/// Options for the outer HTTP layers
#[derive(Clone, Default)]
pub struct PipelineOptions {
    /// CORS policy; `None` leaves cross-origin requests unhandled
    pub cors: Option<CorsLayer>,
    /// Add Strict-Transport-Security to responses
    pub hsts: bool,
}

/// Build the full application router
///
/// Outermost first, a request passes CORS, request tracing, security
/// headers and the panic guard before routing. Users and cards routes then
/// go through the auth gate; signup, signin, health and the 404 fallback do
/// not. Body and path validation run as extractors inside each handler, so
/// on protected routes authentication always comes first. A known path hit
/// with an unsupported method answers like an unknown path.
pub fn app_router(state: AppState, options: PipelineOptions) -> Router {
    let protected = Router::new()
        .merge(user_routes())
        .merge(card_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(auth_routes())
        .merge(protected)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(security_headers));

    if options.hsts {
        router = router.layer(middleware::from_fn(hsts_header));
    }

    router = router.layer(middleware::from_fn(request_tracing));

    if let Some(cors) = options.cors {
        router = router.layer(cors);
    }

    router
}
