//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "DATEFIX_LOG";

/// Initialize logging.
///
/// Reads `DATEFIX_LOG` for filter directives, e.g.
/// `DATEFIX_LOG=datefix_storage=debug`. Falls back to `info` for the datefix
/// crates when unset or invalid. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = env_filter();

        // A test harness may already have installed a global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}

/// Filter used when `DATEFIX_LOG` is unset or does not parse.
pub const DEFAULT_DIRECTIVES: &str =
    "datefix=info,datefix_core=info,datefix_storage=info,datefix_cli=info";

/// Build the filter from `DATEFIX_LOG`, falling back to `DEFAULT_DIRECTIVES`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}
