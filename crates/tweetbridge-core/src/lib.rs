//! Tweetbridge Core Library
//!
//! This crate provides the shared domain models, error types, and configuration
//! used across all Tweetbridge components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{BotConfig, Config, S3Config, SupabaseConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
