//! Configuration for the send/edit mode
//!
//! Loads everything from environment variables

use std::ffi::OsString;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::markdown;

/// Default Bot API endpoint
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Variable read by the send and escape modes when no other name is given
pub const MESSAGE_TEXT_VAR: &str = "TgMessageText";

pub const TOKEN_VAR: &str = "TgToken";
pub const CHAT_ID_VAR: &str = "TgChatId";
pub const MESSAGE_ID_VAR: &str = "TgMessageId";
pub const PARSE_MODE_VAR: &str = "TgParseMode";
pub const PREFIX_VAR: &str = "TgPrefix";
pub const SUFFIX_VAR: &str = "TgSuffix";
pub const PRE_VAR: &str = "TgPre";
pub const DISABLE_NOTIFICATION_VAR: &str = "TgDisableNotification";
pub const DISABLE_WEB_PAGE_PREVIEW_VAR: &str = "TgDisableWebPagePreview";
pub const API_URL_VAR: &str = "TgApiUrl";
pub const TIMEOUT_VAR: &str = "TgTimeout";
pub const VERBOSE_VAR: &str = "Verbose";

/// Every variable the send mode reads
pub const SEND_VARS: &[&str] = &[
    MESSAGE_TEXT_VAR,
    TOKEN_VAR,
    CHAT_ID_VAR,
    MESSAGE_ID_VAR,
    PARSE_MODE_VAR,
    PREFIX_VAR,
    SUFFIX_VAR,
    PRE_VAR,
    DISABLE_NOTIFICATION_VAR,
    DISABLE_WEB_PAGE_PREVIEW_VAR,
    API_URL_VAR,
    TIMEOUT_VAR,
];

/// One chat to deliver to, plus the message to replace when editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub chat_id: i64,
    pub message_id: Option<i64>,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    /// Trimmed `TgMessageText`
    pub message_text: String,
    pub token: String,
    pub chat_ids: Vec<i64>,
    /// Empty unless editing; otherwise parallel to `chat_ids`
    pub message_ids: Vec<i64>,
    pub prefix: String,
    pub suffix: String,
    pub parse_mode: Option<String>,
    pub disable_notification: bool,
    pub disable_web_page_preview: bool,
    pub preformatted: bool,
    pub api_url: String,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A variable holding non-UTF-8 data is an error rather than unset.
    pub fn from_env() -> Result<Self> {
        for name in SEND_VARS {
            env_var(name)?;
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();

        let message_text = var(MESSAGE_TEXT_VAR).trim().to_string();
        if message_text.is_empty() {
            return Err(Error::EmptyMessageText);
        }

        let token = var(TOKEN_VAR);
        if token.is_empty() {
            return Err(Error::EmptyToken);
        }

        let chat_ids = parse_id_list(&var(CHAT_ID_VAR), Error::InvalidChatId)?;
        if chat_ids.is_empty() {
            return Err(Error::NoChatIds);
        }

        let message_ids = parse_id_list(&var(MESSAGE_ID_VAR), Error::InvalidMessageId)?;
        if !message_ids.is_empty() && message_ids.len() != chat_ids.len() {
            return Err(Error::MessageIdCountMismatch {
                chat_ids: chat_ids.len(),
                message_ids: message_ids.len(),
            });
        }

        let parse_mode = Some(var(PARSE_MODE_VAR)).filter(|mode| !mode.is_empty());

        let api_url = match var(API_URL_VAR) {
            url if url.is_empty() => DEFAULT_API_URL.to_string(),
            url => url.trim_end_matches('/').to_string(),
        };

        Ok(Self {
            message_text,
            token,
            chat_ids,
            message_ids,
            prefix: var(PREFIX_VAR),
            suffix: var(SUFFIX_VAR),
            parse_mode,
            disable_notification: flag_or_default(&var(DISABLE_NOTIFICATION_VAR), true),
            disable_web_page_preview: flag_or_default(&var(DISABLE_WEB_PAGE_PREVIEW_VAR), true),
            preformatted: is_enabled(&var(PRE_VAR)),
            api_url,
            timeout: parse_timeout(&var(TIMEOUT_VAR))?,
        })
    }

    /// True when every destination gets `editMessageText` instead of `sendMessage`
    pub fn is_edit(&self) -> bool {
        !self.message_ids.is_empty()
    }

    /// Destinations in delivery order, message ids paired positionally
    pub fn destinations(&self) -> Vec<Destination> {
        self.chat_ids
            .iter()
            .enumerate()
            .map(|(i, &chat_id)| Destination {
                chat_id,
                message_id: self.message_ids.get(i).copied(),
            })
            .collect()
    }

    /// Text actually sent: prefix + message + suffix, fenced when preformatted
    pub fn outgoing_text(&self) -> String {
        let text = format!("{}{}{}", self.prefix, self.message_text, self.suffix);
        if self.preformatted {
            markdown::preformat(&text)
        } else {
            text
        }
    }

    /// Parse mode sent with every request; preformatted text forces MarkdownV2
    pub fn effective_parse_mode(&self) -> Option<String> {
        if self.preformatted {
            Some(markdown::MARKDOWN_V2.to_string())
        } else {
            self.parse_mode.clone()
        }
    }
}

/// Read one environment variable; `None` when unset.
pub fn env_var(name: &str) -> Result<Option<String>> {
    // Such names can never be set.
    if name.is_empty() || name.contains(['=', '\0']) {
        return Ok(None);
    }
    std::env::var_os(name)
        .map(|value| os_value_to_string(name, value))
        .transpose()
}

fn os_value_to_string(name: &str, value: OsString) -> Result<String> {
    value
        .into_string()
        .map_err(|_| Error::NotUnicode(name.to_string()))
}

/// Split a comma-separated id list, skipping empty entries.
fn parse_id_list(raw: &str, invalid: fn(String) -> Error) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.parse::<i64>() {
            Ok(id) if id != 0 => Ok(id),
            _ => Err(invalid(entry.to_string())),
        })
        .collect()
}

/// Non-empty and not the literal `false`
fn is_enabled(value: &str) -> bool {
    !value.is_empty() && value != "false"
}

/// Default-on flag that `false` or `0` switches off
fn flag_or_default(value: &str, default: bool) -> bool {
    match value.trim() {
        "" => default,
        v if v.eq_ignore_ascii_case("false") || v == "0" => false,
        _ => true,
    }
}

fn parse_timeout(value: &str) -> Result<Option<Duration>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(Error::InvalidSetting {
            name: TIMEOUT_VAR,
            value: value.to_string(),
        }),
    }
}
