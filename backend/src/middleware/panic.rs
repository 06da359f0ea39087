//! Panic guard
//!
//! A panicking handler must still answer with the standard error envelope.

use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::error::ApiError;

/// Convert a caught panic payload into a 500 response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}
