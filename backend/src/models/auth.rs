//! Signup and signin request/response models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /signup`
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 2, max = 30))]
    pub password: String,
    #[validate(length(min = 2, max = 30))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 30))]
    pub about: Option<String>,
    #[validate(url)]
    pub avatar: Option<String>,
}

/// Request body for `POST /signin`
#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 2, max = 30))]
    pub password: String,
}

/// Response body for a successful signin
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Canonical form of an email used for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
