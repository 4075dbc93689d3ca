//! Command-line parsing and mode selection
//!
//! The mode is picked before any environment validation runs, so `version`
//! and `escape` work without a token or chat ids. Anything that is not one of
//! those modes sends, including `help`, `-h` and unknown flags.

use std::ffi::OsString;

use clap::{Parser, Subcommand};

use crate::config::MESSAGE_TEXT_VAR;

#[derive(Parser, Debug)]
#[command(name = "teleji")]
#[command(
    about = "Send or edit a Telegram message taken from TgMessageText",
    long_about = None
)]
#[command(
    disable_version_flag = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    allow_external_subcommands = true
)]
pub struct Cli {
    /// Print version and exit
    #[arg(long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print version and exit
    #[command(disable_help_flag = true)]
    Version,

    /// Print MarkdownV2-escaped text and exit
    #[command(disable_help_flag = true)]
    Escape {
        /// Variable to read instead of TgMessageText; later arguments are ignored
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    #[command(external_subcommand)]
    Other(Vec<OsString>),
}

/// What this invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Version,
    Escape { var_name: String },
    Send,
}

impl From<Cli> for Mode {
    fn from(cli: Cli) -> Self {
        match cli.command {
            None if cli.version => Mode::Version,
            Some(Command::Version) if !cli.version => Mode::Version,
            Some(Command::Escape { args }) if !cli.version => Mode::Escape {
                var_name: args
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| MESSAGE_TEXT_VAR.to_string()),
            },
            _ => Mode::Send,
        }
    }
}

impl Mode {
    /// Select the mode from raw arguments (program name first).
    ///
    /// `version` and `--version` only count when they are the sole argument.
    /// Arguments that match no mode, or that clap rejects, select [`Mode::Send`].
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args)
            .map(Mode::from)
            .unwrap_or(Mode::Send)
    }
}
