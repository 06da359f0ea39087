//! Profile update request models

use serde::Deserialize;
use validator::Validate;

/// Request body for `PATCH /users/me`
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 30))]
    pub name: String,
    #[validate(length(min = 2, max = 30))]
    pub about: String,
}

/// Request body for `PATCH /users/me/avatar`
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAvatarRequest {
    #[validate(url)]
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_length_bounds() {
        let ok = UpdateProfileRequest {
            name: "Jacques".to_string(),
            about: "Sailor".to_string(),
        };
        assert!(ok.validate().is_ok());

        let too_long = UpdateProfileRequest {
            name: "Jacques".to_string(),
            about: "a".repeat(31),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_avatar_must_be_url() {
        let bad = UpdateAvatarRequest {
            avatar: "avatar.png".to_string(),
        };
        assert!(bad.validate().is_err());

        let good = UpdateAvatarRequest {
            avatar: "https://example.com/avatar.png".to_string(),
        };
        assert!(good.validate().is_ok());
    }
}
