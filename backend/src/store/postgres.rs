//! PostgreSQL adapter for the store ports

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{CardStore, StoreError, StoreHealth, UserStore};
use crate::models::{Card, NewCard, NewUser, User};

const USER_COLUMNS: &str = "id, email, password_hash, name, about, avatar, created_at";
const CARD_COLUMNS: &str = "id, name, link, owner, likes, created_at";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                StoreError::InvalidReference(db_err.message().to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            _ => StoreError::Query(err.to_string()),
        }
    }
}

/// Store backed by a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgStore {
    db_pool: PgPool,
}

impl PgStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let created = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, email, password_hash, name, about, avatar)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(&user.about)
        .bind(&user.avatar)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(created)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
        ))
        .fetch_all(&self.db_pool)
        .await?;

        Ok(users)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(user)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        about: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET name = $2, about = $3 WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(about)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(user)
    }

    async fn update_avatar(&self, id: Uuid, avatar: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET avatar = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(avatar)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl CardStore for PgStore {
    async fn insert_card(&self, card: NewCard) -> Result<Card, StoreError> {
        let created = sqlx::query_as::<_, Card>(&format!(
            r#"
            INSERT INTO cards (id, name, link, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING {CARD_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&card.name)
        .bind(&card.link)
        .bind(card.owner)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(created)
    }

    async fn list_cards(&self) -> Result<Vec<Card>, StoreError> {
        let cards = sqlx::query_as::<_, Card>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards ORDER BY created_at"
        ))
        .fetch_all(&self.db_pool)
        .await?;

        Ok(cards)
    }

    async fn find_card(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        let card = sqlx::query_as::<_, Card>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(card)
    }

    async fn delete_owned_card(&self, id: Uuid, owner: Uuid) -> Result<Option<Card>, StoreError> {
        let card = sqlx::query_as::<_, Card>(&format!(
            "DELETE FROM cards WHERE id = $1 AND owner = $2 RETURNING {CARD_COLUMNS}"
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(card)
    }

    async fn add_like(&self, id: Uuid, user: Uuid) -> Result<Option<Card>, StoreError> {
        // Single statement, so concurrent likes by the same user cannot both append
        let card = sqlx::query_as::<_, Card>(&format!(
            r#"
            UPDATE cards
            SET likes = CASE WHEN $2 = ANY(likes) THEN likes ELSE array_append(likes, $2) END
            WHERE id = $1
            RETURNING {CARD_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(card)
    }

    async fn remove_like(&self, id: Uuid, user: Uuid) -> Result<Option<Card>, StoreError> {
        let card = sqlx::query_as::<_, Card>(&format!(
            "UPDATE cards SET likes = array_remove(likes, $2) WHERE id = $1 RETURNING {CARD_COLUMNS}"
        ))
        .bind(id)
        .bind(user)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(card)
    }
}

#[async_trait]
impl StoreHealth for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::db::check_health(&self.db_pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}
