//! Logging initialization for `verdict`.
//!
//! Diagnostics go to stderr so report paths and summaries on stdout stay
//! clean for scripting. `RUST_LOG` overrides the verbosity flags.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `-v` maps to debug, `-vv` and above to trace; `--quiet` restricts
/// output to errors.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))
}

/// Initialize logging for tests; safe to call from every test.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    });
}
