//! Diagnostic logging.
//!
//! User-facing progress goes to stdout with `println!`. Everything here is for
//! troubleshooting and is written to stderr, filtered by `PLINTH_LOG`
//! (e.g. `PLINTH_LOG=plinth=debug`). Defaults to `warn`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "PLINTH_LOG";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
