//! Error types for teleji

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty TgMessageText.")]
    EmptyMessageText,

    #[error("Empty TgToken env var.")]
    EmptyToken,

    #[error("Invalid chat id `{0}`")]
    InvalidChatId(String),

    #[error("Empty or invalid TgChatId env var.")]
    NoChatIds,

    #[error("Invalid message id `{0}`")]
    InvalidMessageId(String),

    #[error(
        "Number of message ids should be equal to number of chat ids \
         ({message_ids} message ids, {chat_ids} chat ids)."
    )]
    MessageIdCountMismatch { chat_ids: usize, message_ids: usize },

    #[error("Invalid {0} env var: not valid UTF-8.")]
    NotUnicode(String),

    #[error("Invalid {name} value `{value}`")]
    InvalidSetting { name: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Api response not OK: {description} (error_code: {error_code:?})")]
    Api {
        description: String,
        error_code: Option<i64>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // The request URL embeds the bot token.
        Error::Transport(err.without_url().to_string())
    }
}
