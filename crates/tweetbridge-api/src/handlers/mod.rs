//! HTTP request handlers.

pub mod accept_post;
pub mod bot_post;
pub mod health;
pub mod media_delete;
pub mod upload_url;
pub mod user_delete;
