//! Application state shared across handlers

use std::sync::Arc;

use crate::auth::{AuthService, AuthSettings};
use crate::services::{CardService, UserService};
use crate::store::{CardStore, StoreHealth, UserStore};

use axum::extract::FromRef;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub card_service: Arc<CardService>,
    pub store_health: Arc<dyn StoreHealth>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        user_service: Arc<UserService>,
        card_service: Arc<CardService>,
        store_health: Arc<dyn StoreHealth>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            card_service,
            store_health,
        }
    }

    /// Wire every service to one store implementation
    pub fn from_store<S>(store: S, settings: AuthSettings) -> Self
    where
        S: UserStore + CardStore + StoreHealth + 'static,
    {
        let store = Arc::new(store);
        let users: Arc<dyn UserStore> = store.clone();
        let cards: Arc<dyn CardStore> = store.clone();

        Self::new(
            Arc::new(AuthService::new(users.clone(), settings)),
            Arc::new(UserService::new(users)),
            Arc::new(CardService::new(cards)),
            store,
        )
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<UserService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.user_service.clone()
    }
}

impl FromRef<AppState> for Arc<CardService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.card_service.clone()
    }
}

impl FromRef<AppState> for Arc<dyn StoreHealth> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store_health.clone()
    }
}
