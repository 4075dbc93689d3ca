//! Send or edit the configured message in every destination chat
//!
//! Destinations are handled one at a time, in order. The first failure stops
//! the run; ids already printed stay printed.

use std::io::Write;

use tracing::debug;

use crate::bot_api::{BotClient, EditMessageTextRequest, SendMessageRequest};
use crate::config::{Config, Destination};
use crate::error::Result;

/// Build the request body for one destination.
pub fn build_request(config: &Config, text: &str, chat_id: i64) -> SendMessageRequest {
    SendMessageRequest {
        chat_id,
        text: text.to_string(),
        parse_mode: config.effective_parse_mode(),
        disable_notification: config.disable_notification,
        disable_web_page_preview: config.disable_web_page_preview,
    }
}

/// Deliver to every destination, writing each resulting message id to `out`.
pub async fn dispatch<W: Write>(
    config: &Config,
    client: &BotClient,
    out: &mut W,
) -> Result<Vec<i64>> {
    let text = config.outgoing_text();
    let mut ids = Vec::with_capacity(config.chat_ids.len());
    debug!(
        destinations = config.chat_ids.len(),
        edit = config.is_edit(),
        "dispatching"
    );

    for Destination {
        chat_id,
        message_id,
    } in config.destinations()
    {
        let request = build_request(config, &text, chat_id);

        let id = match message_id {
            None => {
                debug!(chat_id, "sendMessage");
                client.send_message(&request).await?
            }
            Some(message_id) => {
                debug!(chat_id, message_id, "editMessageText");
                client
                    .edit_message_text(&EditMessageTextRequest {
                        message: request,
                        message_id,
                    })
                    .await?
            }
        };

        writeln!(out, "{}", id)?;
        out.flush()?;
        ids.push(id);
    }

    Ok(ids)
}

/// CLI entry point
pub async fn run(config: &Config) -> Result<()> {
    let client = BotClient::new(&config.api_url, &config.token, config.timeout)?;
    let mut stdout = std::io::stdout();
    dispatch(config, &client, &mut stdout).await?;
    Ok(())
}
