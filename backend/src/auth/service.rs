//! Authentication service
//!
//! Signup, signin and the stateless token checks used by the auth gate.

use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{
    normalize_email, NewUser, SignupRequest, User, DEFAULT_USER_ABOUT, DEFAULT_USER_AVATAR,
    DEFAULT_USER_NAME,
};
use crate::store::{StoreError, UserStore};

use super::jwt::{generate_token, get_user_id_from_claims, verify_token, JwtError};
use super::password::{hash_password, verify_password, PasswordError};

/// Client message when a protected route is hit without valid credentials
pub const AUTH_REQUIRED_MESSAGE: &str = "Authorization required";

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::EmailTaken => {
                ApiError::Conflict("A user with this email already exists".to_string())
            }
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Incorrect email or password".to_string())
            }
            AuthError::Token(JwtError::TokenExpired) => {
                ApiError::Unauthorized("Token has expired".to_string())
            }
            AuthError::Token(JwtError::InvalidToken(_)) => {
                ApiError::Unauthorized(AUTH_REQUIRED_MESSAGE.to_string())
            }
            AuthError::Token(e @ JwtError::EncodingFailed(_)) => ApiError::Internal(e.to_string()),
            AuthError::Password(e) => ApiError::Internal(e.to_string()),
            AuthError::Store(e) => e.into(),
        }
    }
}

/// Token and password hashing parameters
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_ttl_seconds: i64,
    pub bcrypt_cost: u32,
}

impl From<&Config> for AuthSettings {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            token_ttl_seconds: config.jwt_ttl_seconds,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    settings: AuthSettings,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, settings: AuthSettings) -> Self {
        Self { users, settings }
    }

    /// Register a new user, filling in profile defaults
    pub async fn signup(&self, request: SignupRequest) -> Result<User, AuthError> {
        let email = normalize_email(&request.email);
        let password_hash = hash_password(request.password, self.settings.bcrypt_cost).await?;

        let user = self
            .users
            .insert_user(NewUser {
                email,
                password_hash,
                name: request.name.unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
                about: request.about.unwrap_or_else(|| DEFAULT_USER_ABOUT.to_string()),
                avatar: request
                    .avatar
                    .unwrap_or_else(|| DEFAULT_USER_AVATAR.to_string()),
            })
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(_) => AuthError::EmailTaken,
                other => AuthError::Store(other),
            })?;

        tracing::info!(user_id = %user.id, "User signed up");

        Ok(user)
    }

    /// Check credentials and issue a token for the matching user
    pub async fn signin(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .users
            .find_user_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = verify_password(password.to_string(), user.password_hash.clone()).await?;
        if !matches {
            tracing::debug!(user_id = %user.id, "Password mismatch on signin");
            return Err(AuthError::InvalidCredentials);
        }

        self.issue(user.id)
    }

    /// Issue a token embedding the given identity
    pub fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        Ok(generate_token(
            user_id,
            &self.settings.jwt_secret,
            self.settings.token_ttl_seconds,
        )?)
    }

    /// Resolve a token to the identity it was issued for
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        let claims = verify_token(token, &self.settings.jwt_secret)?;
        Ok(get_user_id_from_claims(&claims)?)
    }
}
