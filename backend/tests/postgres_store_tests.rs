//! PostgreSQL adapter tests
//!
//! These need a disposable database reachable through `TEST_DATABASE_URL`.

#[cfg(test)]
mod tests {
    use sqlx::PgPool;
    use uuid::Uuid;

    use around_server::db;
    use around_server::models::{NewCard, NewUser};
    use around_server::store::{CardStore, PgStore, StoreError, StoreHealth, UserStore};

    /// Helper to create a migrated test database pool
    async fn setup_test_db() -> PgPool {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/around_test".to_string());

        let pool = db::create_pool(&database_url, 1)
            .await
            .expect("Failed to connect to test database");
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }

    fn new_user() -> NewUser {
        NewUser {
            email: format!("{}@example.com", Uuid::new_v4()),
            password_hash: "hash".to_string(),
            name: "Jacques Cousteau".to_string(),
            about: "Explorer".to_string(),
            avatar: "https://example.com/a.jpg".to_string(),
        }
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_unique_email_maps_to_duplicate() {
        let store = PgStore::new(setup_test_db().await);
        let user = new_user();

        store.insert_user(user.clone()).await.unwrap();
        let err = store.insert_user(user).await.unwrap_err();

        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_unknown_owner_maps_to_invalid_reference() {
        let store = PgStore::new(setup_test_db().await);

        let err = store
            .insert_card(NewCard {
                name: "Lake".to_string(),
                link: "https://example.com/lake.jpg".to_string(),
                owner: Uuid::new_v4(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::InvalidReference(_)));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_likes_behave_as_a_set() {
        let store = PgStore::new(setup_test_db().await);
        let owner = store.insert_user(new_user()).await.unwrap();
        let card = store
            .insert_card(NewCard {
                name: "Lake".to_string(),
                link: "https://example.com/lake.jpg".to_string(),
                owner: owner.id,
            })
            .await
            .unwrap();
        assert!(card.likes.is_empty());

        store.add_like(card.id, owner.id).await.unwrap();
        let liked = store.add_like(card.id, owner.id).await.unwrap().unwrap();
        assert_eq!(liked.likes, vec![owner.id]);

        let unchanged = store
            .remove_like(card.id, Uuid::new_v4())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.likes, vec![owner.id]);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_delete_owned_card_checks_owner() {
        let store = PgStore::new(setup_test_db().await);
        let owner = store.insert_user(new_user()).await.unwrap();
        let card = store
            .insert_card(NewCard {
                name: "Lake".to_string(),
                link: "https://example.com/lake.jpg".to_string(),
                owner: owner.id,
            })
            .await
            .unwrap();

        assert!(store
            .delete_owned_card(card.id, Uuid::new_v4())
            .await
            .unwrap()
            .is_none());
        assert!(store
            .delete_owned_card(card.id, owner.id)
            .await
            .unwrap()
            .is_some());
        assert!(store.find_card(card.id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_ping() {
        let store = PgStore::new(setup_test_db().await);
        store.ping().await.unwrap();
    }
}
