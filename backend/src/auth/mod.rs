//! Authentication module
//!
//! - Password hashing and comparison with bcrypt
//! - JWT bearer token generation and validation
//! - Signup and signin against the user store

mod jwt;
mod password;
mod service;

pub use jwt::{generate_token, verify_token, Claims, JwtError};
pub use password::{hash_password, verify_password, PasswordError};
pub use service::{AuthError, AuthService, AuthSettings, AUTH_REQUIRED_MESSAGE};
