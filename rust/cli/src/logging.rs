//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; the game log itself is
//! rendered separately by [`crate::formatters`].

use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "warn,cardwar_engine=debug,cardwar_cli=debug";
const DEFAULT_FILTER: &str = "warn";

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
