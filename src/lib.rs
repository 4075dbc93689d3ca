//! teleji library
//!
//! Sends (or edits) a Telegram message described by environment variables:
//! - `config`: environment parsing and validation
//! - `bot_api`: minimal Bot API client (`sendMessage`, `editMessageText`)
//! - `markdown`: MarkdownV2 escaping and preformatting
//! - `commands`: the send, escape and version modes

pub mod bot_api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod markdown;

// Re-export common types
pub use bot_api::BotClient;
pub use cli::Mode;
pub use config::{Config, Destination};
pub use error::{Error, Result};

pub mod commands;
