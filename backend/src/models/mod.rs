//! Data models for the Around API

use serde::Serialize;
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod auth;
pub mod card;
pub mod user;

pub use auth::*;
pub use card::*;
pub use user::*;

/// Profile name given to users who sign up without one
pub const DEFAULT_USER_NAME: &str = "Jacques Cousteau";

/// Profile description given to users who sign up without one
pub const DEFAULT_USER_ABOUT: &str = "Explorer";

/// Avatar given to users who sign up without one
pub const DEFAULT_USER_AVATAR: &str =
    "https://pictures.s3.yandex.net/resources/avatar_1604080799.jpg";

/// Stored user record
///
/// Carries the password hash, so it is never serialized directly; handlers
/// respond with [`UserResponse`].
#[derive(Debug, sqlx::FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

/// User fields accepted by the store on insert
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
}

/// User response (sanitized for API)
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            about: user.about,
            avatar: user.avatar,
            created_at: user.created_at,
        }
    }
}

/// Card model
#[derive(Debug, Serialize, sqlx::FromRow, Clone, PartialEq)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub link: String,
    pub owner: Uuid,
    /// Users who liked the card; never holds the same id twice
    pub likes: Vec<Uuid>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Card fields accepted by the store on insert
#[derive(Debug, Clone)]
pub struct NewCard {
    pub name: String,
    pub link: String,
    pub owner: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_user_response_drops_password() {
        let user = User {
            id: Uuid::new_v4(),
            email: "diver@example.com".to_string(),
            password_hash: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
            name: DEFAULT_USER_NAME.to_string(),
            about: DEFAULT_USER_ABOUT.to_string(),
            avatar: DEFAULT_USER_AVATAR.to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();
        assert_eq!(json["_id"], user.id.to_string());
        assert_eq!(json["email"], "diver@example.com");
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("$2b$"));
    }

    #[test]
    fn test_card_serializes_with_document_field_names() {
        let owner = Uuid::new_v4();
        let card = Card {
            id: Uuid::new_v4(),
            name: "Ока".to_string(),
            link: "http://a.io/x.jpg".to_string(),
            owner,
            likes: vec![],
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["_id"], card.id.to_string());
        assert_eq!(json["owner"], owner.to_string());
        assert_eq!(json["likes"], serde_json::json!([]));
        assert!(json.get("createdAt").is_some());
    }
}
