//! Middleware for the Around API
//!
//! This module provides middleware for request tracing, security headers,
//! CORS, panic recovery and authentication.

pub mod auth;
mod cors;
mod panic;
mod security;
mod tracing;

pub use auth::{require_auth, CurrentUser};
pub use cors::configure_cors;
pub use panic::handle_panic;
pub use security::{hsts_header, security_headers};
pub use tracing::request_tracing;
