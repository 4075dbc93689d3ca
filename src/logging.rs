//! Logging setup.
//!
//! Everything goes to stderr so stdout only carries message ids, escaped
//! text or the version string.

use tracing_subscriber::filter::{Directive, FilterExt, LevelFilter};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Short local timestamp, e.g. `241019:0931`.
pub const TIME_FORMAT: &str = "%y%m%d:%H%M";

/// Default filter directive when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "teleji=info";

/// Directive forced on by `Verbose`, whatever `RUST_LOG` says.
pub const VERBOSE_DIRECTIVE: &str = "teleji=debug";

/// Filter built from `rust_log` (the `RUST_LOG` value, if any) and `Verbose`.
///
/// Errors are never filtered out: the returned filter is combined with an
/// `ERROR` floor in [`init`].
pub fn env_filter(rust_log: Option<&str>, verbose: bool) -> anyhow::Result<EnvFilter> {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));

    if verbose {
        let directive: Directive = VERBOSE_DIRECTIVE.parse()?;
        Ok(filter.add_directive(directive))
    } else {
        Ok(filter)
    }
}

/// Install the global subscriber.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(rust_log.as_deref(), verbose)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_filter(filter.or(LevelFilter::ERROR)),
        )
        .try_init()?;

    Ok(())
}
