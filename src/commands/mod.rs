//! Command implementations
//!
//! Each module corresponds to a mode of the CLI.

pub mod escape;
pub mod send_message;
pub mod version;

pub use escape::run as escape_run;
pub use send_message::{dispatch, run as send_message_run};
pub use version::VERSION;
