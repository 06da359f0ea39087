//! Health check handler

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::store::StoreHealth;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health_check(
    State(store): State<Arc<dyn StoreHealth>>,
) -> (StatusCode, Json<HealthResponse>) {
    let (status, code, store_status) = match store.ping().await {
        Ok(()) => ("healthy", StatusCode::OK, "connected"),
        Err(e) => {
            tracing::error!(error = %e, "Store health check failed");
            ("unhealthy", StatusCode::SERVICE_UNAVAILABLE, "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            store: store_status,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
