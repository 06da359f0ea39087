//! Password hashing
//!
//! bcrypt is deliberately slow, so both hashing and comparison run on the
//! blocking thread pool instead of a runtime worker.

use thiserror::Error;
use tokio::task;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Password task failed: {0}")]
    TaskFailed(String),
}

/// Hash a plaintext password with the given bcrypt cost
pub async fn hash_password(password: String, cost: u32) -> Result<String, PasswordError> {
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
        .map_err(|e| PasswordError::HashFailed(e.to_string()))
}

/// Compare a plaintext password against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
        .map_err(|e| PasswordError::HashFailed(e.to_string()))
}
