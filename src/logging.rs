//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding a tracing filter, e.g. `ORFSCAN_LOG=orfscan=debug`.
pub const LOG_ENV: &str = "ORFSCAN_LOG";

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so stdout only carries the report. `ORFSCAN_LOG`
/// takes precedence; otherwise the level is `orfscan=debug` when `verbose`
/// is set and `orfscan=warn` if not.
///
/// Calling this more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose { "orfscan=debug" } else { "orfscan=warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .init();
    });
}
