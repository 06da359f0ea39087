//! Persistence ports for users and cards
//!
//! Services talk to the store only through these traits. Two adapters ship
//! with the server: [`PgStore`] for PostgreSQL and [`MemoryStore`] for tests
//! and throwaway local runs.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Card, NewCard, NewUser, User};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store failures, classified at the adapter boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    /// A referenced record does not exist
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// The store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    Query(String),
}

/// Persistence port for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user; fails with [`StoreError::Duplicate`] when the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Look up by the normalized email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        about: &str,
    ) -> Result<Option<User>, StoreError>;

    async fn update_avatar(&self, id: Uuid, avatar: &str) -> Result<Option<User>, StoreError>;
}

/// Persistence port for cards
#[async_trait]
pub trait CardStore: Send + Sync {
    async fn insert_card(&self, card: NewCard) -> Result<Card, StoreError>;

    /// All cards, oldest first.
    async fn list_cards(&self) -> Result<Vec<Card>, StoreError>;

    async fn find_card(&self, id: Uuid) -> Result<Option<Card>, StoreError>;

    /// Delete the card only if `owner` owns it, returning the removed card.
    async fn delete_owned_card(&self, id: Uuid, owner: Uuid) -> Result<Option<Card>, StoreError>;

    /// Add `user` to the card's likes unless already present.
    async fn add_like(&self, id: Uuid, user: Uuid) -> Result<Option<Card>, StoreError>;

    /// Remove `user` from the card's likes; absent users are a no-op.
    async fn remove_like(&self, id: Uuid, user: Uuid) -> Result<Option<Card>, StoreError>;
}

/// Liveness probe for the backing store
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}
