//! User profile operations

use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{UpdateAvatarRequest, UpdateProfileRequest, User, UserResponse};
use crate::store::UserStore;

pub const USER_NOT_FOUND_MESSAGE: &str = "The requested user was not found";

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn list_users(&self) -> ApiResult<Vec<UserResponse>> {
        let users = self.users.list_users().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, id: Uuid) -> ApiResult<UserResponse> {
        found(self.users.find_user(id).await?)
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        request: UpdateProfileRequest,
    ) -> ApiResult<UserResponse> {
        let updated = self
            .users
            .update_profile(id, &request.name, &request.about)
            .await?;

        found(updated)
    }

    pub async fn update_avatar(
        &self,
        id: Uuid,
        request: UpdateAvatarRequest,
    ) -> ApiResult<UserResponse> {
        found(self.users.update_avatar(id, &request.avatar).await?)
    }
}

fn found(user: Option<User>) -> ApiResult<UserResponse> {
    user.map(UserResponse::from)
        .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))
}
