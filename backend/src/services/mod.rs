//! Business services behind the HTTP handlers

mod cards;
mod users;

pub use cards::{CardService, CARD_NOT_FOUND_MESSAGE, NOT_CARD_OWNER_MESSAGE};
pub use users::{UserService, USER_NOT_FOUND_MESSAGE};
