//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "RULEMINER_LOG";

/// Initialize the ruleminer tracing/logging system.
///
/// Reads `RULEMINER_LOG` for per-crate log levels, e.g.
/// `RULEMINER_LOG=ruleminer_mining=debug,ruleminer_pipeline=info`.
///
/// Falls back to `ruleminer=info` if `RULEMINER_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("ruleminer=info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .try_init();
    });
}
