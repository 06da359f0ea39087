//! Card operations
//!
//! Each operation makes at most one mutating store call. Ownership is only
//! checked on delete, and only the owner may delete.

use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{Card, CreateCardRequest, NewCard};
use crate::store::{CardStore, StoreError};

pub const CARD_NOT_FOUND_MESSAGE: &str = "The requested card was not found";
pub const NOT_CARD_OWNER_MESSAGE: &str = "You cannot delete a card that does not belong to you";

#[derive(Clone)]
pub struct CardService {
    cards: Arc<dyn CardStore>,
}

impl CardService {
    pub fn new(cards: Arc<dyn CardStore>) -> Self {
        Self { cards }
    }

    pub async fn list_cards(&self) -> ApiResult<Vec<Card>> {
        Ok(self.cards.list_cards().await?)
    }

    pub async fn create_card(&self, owner: Uuid, request: CreateCardRequest) -> ApiResult<Card> {
        let card = self
            .cards
            .insert_card(NewCard {
                name: request.name,
                link: request.link,
                owner,
            })
            .await
            .map_err(|e| match e {
                StoreError::InvalidReference(_) => ApiError::BadRequest(
                    "Validation failed. Check your request format".to_string(),
                ),
                other => other.into(),
            })?;

        tracing::info!(card_id = %card.id, owner = %owner, "Card created");

        Ok(card)
    }

    /// Delete a card owned by `caller`
    ///
    /// The delete itself is conditional on ownership; the follow-up read
    /// only decides between 403 and 404 when nothing was removed.
    pub async fn delete_card(&self, id: Uuid, caller: Uuid) -> ApiResult<Card> {
        if let Some(card) = self.cards.delete_owned_card(id, caller).await? {
            tracing::info!(card_id = %id, owner = %caller, "Card deleted");
            return Ok(card);
        }

        match self.cards.find_card(id).await? {
            Some(card) => {
                tracing::warn!(card_id = %id, owner = %card.owner, caller = %caller, "Rejected delete by non-owner");
                Err(ApiError::Forbidden(NOT_CARD_OWNER_MESSAGE.to_string()))
            }
            None => Err(card_not_found()),
        }
    }

    pub async fn like_card(&self, id: Uuid, user: Uuid) -> ApiResult<Card> {
        self.cards
            .add_like(id, user)
            .await?
            .ok_or_else(card_not_found)
    }

    pub async fn dislike_card(&self, id: Uuid, user: Uuid) -> ApiResult<Card> {
        self.cards
            .remove_like(id, user)
            .await?
            .ok_or_else(card_not_found)
    }
}

fn card_not_found() -> ApiError {
    ApiError::NotFound(CARD_NOT_FOUND_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;
    use crate::store::{MemoryStore, UserStore};

    async fn setup() -> (CardService, Uuid, Uuid) {
        let store = Arc::new(MemoryStore::new());
        let mut ids = Vec::new();
        for email in ["owner@example.com", "guest@example.com"] {
            let user = store
                .insert_user(NewUser {
                    email: email.to_string(),
                    password_hash: "hash".to_string(),
                    name: "Jacques Cousteau".to_string(),
                    about: "Explorer".to_string(),
                    avatar: "https://example.com/a.jpg".to_string(),
                })
                .await
                .unwrap();
            ids.push(user.id);
        }
        (CardService::new(store), ids[0], ids[1])
    }

    fn lake() -> CreateCardRequest {
        CreateCardRequest {
            name: "Lake".to_string(),
            link: "https://example.com/lake.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_sets_owner_and_empty_likes() {
        let (service, owner, _) = setup().await;

        let card = service.create_card(owner, lake()).await.unwrap();
        assert_eq!(card.owner, owner);
        assert!(card.likes.is_empty());
    }

    #[tokio::test]
    async fn test_create_for_unknown_owner_is_bad_request() {
        let (service, _, _) = setup().await;

        let err = service.create_card(Uuid::new_v4(), lake()).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_delete_distinguishes_forbidden_from_not_found() {
        let (service, owner, guest) = setup().await;
        let card = service.create_card(owner, lake()).await.unwrap();

        let forbidden = service.delete_card(card.id, guest).await.unwrap_err();
        assert!(matches!(forbidden, ApiError::Forbidden(_)));

        let deleted = service.delete_card(card.id, owner).await.unwrap();
        assert_eq!(deleted.id, card.id);

        let gone = service.delete_card(card.id, owner).await.unwrap_err();
        assert!(matches!(gone, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_like_and_dislike_are_idempotent() {
        let (service, owner, guest) = setup().await;
        let card = service.create_card(owner, lake()).await.unwrap();

        let once = service.like_card(card.id, guest).await.unwrap();
        let twice = service.like_card(card.id, guest).await.unwrap();
        assert_eq!(once.likes, vec![guest]);
        assert_eq!(twice.likes, once.likes);

        let unliked = service.dislike_card(card.id, owner).await.unwrap();
        assert_eq!(unliked.likes, vec![guest]);

        let cleared = service.dislike_card(card.id, guest).await.unwrap();
        assert!(cleared.likes.is_empty());
    }

    #[tokio::test]
    async fn test_like_missing_card_is_not_found() {
        let (service, _, guest) = setup().await;

        let err = service.like_card(Uuid::new_v4(), guest).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
