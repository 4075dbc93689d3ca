//! teleji - main entry point
//!
//! Sends TgMessageText to every chat in TgChatId, prints escaped text, or
//! prints the version.

use std::process::ExitCode;

use tracing::error;

use teleji::config::VERBOSE_VAR;
use teleji::{commands, logging, Config, Mode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    let mode = Mode::from_args(std::env::args_os());

    let verbose = std::env::var_os(VERBOSE_VAR).is_some_and(|v| !v.is_empty());
    if let Err(err) = logging::init(verbose) {
        eprintln!("Failed to initialize logging: {:#}", err);
        return ExitCode::FAILURE;
    }

    match execute(mode).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn execute(mode: Mode) -> anyhow::Result<()> {
    match mode {
        Mode::Version => commands::version::run(),
        Mode::Escape { var_name } => commands::escape_run(&var_name)?,
        Mode::Send => {
            let config = Config::from_env()?;
            commands::send_message_run(&config).await?;
        }
    }

    Ok(())
}
