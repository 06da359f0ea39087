//! Card request models

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /cards`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCardRequest {
    #[validate(length(min = 2, max = 30))]
    pub name: String,
    #[validate(url)]
    pub link: String,
}
