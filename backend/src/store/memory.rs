//! In-process adapter for the store ports
//!
//! Mirrors the PostgreSQL semantics the services rely on: unique emails,
//! owner references that must exist, and set-like card likes.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use super::{CardStore, StoreError, StoreHealth, UserStore};
use crate::models::{Card, NewCard, NewUser, User};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    cards: Vec<Card>,
}

/// Store that keeps every record in memory, in insertion order
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    fn update_user<F>(&self, id: Uuid, apply: F) -> Result<Option<User>, StoreError>
    where
        F: FnOnce(&mut User),
    {
        let mut data = self.write()?;
        Ok(data.users.iter_mut().find(|u| u.id == id).map(|user| {
            apply(user);
            user.clone()
        }))
    }

    fn update_card<F>(&self, id: Uuid, apply: F) -> Result<Option<Card>, StoreError>
    where
        F: FnOnce(&mut Card),
    {
        let mut data = self.write()?;
        Ok(data.cards.iter_mut().find(|c| c.id == id).map(|card| {
            apply(card);
            card.clone()
        }))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut data = self.write()?;

        if data.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(format!(
                "email {} already registered",
                user.email
            )));
        }

        let created = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_hash: user.password_hash,
            name: user.name,
            about: user.about,
            avatar: user.avatar,
            created_at: Utc::now(),
        };
        data.users.push(created.clone());

        Ok(created)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read()?.users.clone())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        about: &str,
    ) -> Result<Option<User>, StoreError> {
        self.update_user(id, |user| {
            user.name = name.to_string();
            user.about = about.to_string();
        })
    }

    async fn update_avatar(&self, id: Uuid, avatar: &str) -> Result<Option<User>, StoreError> {
        self.update_user(id, |user| user.avatar = avatar.to_string())
    }
}

#[async_trait]
impl CardStore for MemoryStore {
    async fn insert_card(&self, card: NewCard) -> Result<Card, StoreError> {
        let mut data = self.write()?;

        if !data.users.iter().any(|u| u.id == card.owner) {
            return Err(StoreError::InvalidReference(format!(
                "owner {} does not exist",
                card.owner
            )));
        }

        let created = Card {
            id: Uuid::new_v4(),
            name: card.name,
            link: card.link,
            owner: card.owner,
            likes: Vec::new(),
            created_at: Utc::now(),
        };
        data.cards.push(created.clone());

        Ok(created)
    }

    async fn list_cards(&self) -> Result<Vec<Card>, StoreError> {
        Ok(self.read()?.cards.clone())
    }

    async fn find_card(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        Ok(self.read()?.cards.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_owned_card(&self, id: Uuid, owner: Uuid) -> Result<Option<Card>, StoreError> {
        let mut data = self.write()?;

        let position = data
            .cards
            .iter()
            .position(|c| c.id == id && c.owner == owner);

        Ok(position.map(|index| data.cards.remove(index)))
    }

    async fn add_like(&self, id: Uuid, user: Uuid) -> Result<Option<Card>, StoreError> {
        self.update_card(id, |card| {
            if !card.likes.contains(&user) {
                card.likes.push(user);
            }
        })
    }

    async fn remove_like(&self, id: Uuid, user: Uuid) -> Result<Option<Card>, StoreError> {
        self.update_card(id, |card| card.likes.retain(|liker| *liker != user))
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }
}
