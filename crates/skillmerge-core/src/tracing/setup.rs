//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the skillmerge tracing/logging system.
///
/// Reads `SKILLMERGE_LOG` for per-crate log levels.
/// Format: `SKILLMERGE_LOG=skillmerge_engine=debug,skillmerge_core=warn`
///
/// Falls back to `info` for both crates if `SKILLMERGE_LOG` is not set or is invalid.
///
/// Idempotent. Does nothing if another global subscriber is already installed.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
