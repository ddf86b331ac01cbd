//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

const DEFAULT_FILTER: &str = "rgci_core=info,rgci_causal=info";

static INIT: Once = Once::new();

/// Initialize the rgci tracing/logging system.
///
/// Reads the `RGCI_LOG` environment variable for per-module log levels.
/// Format: `RGCI_LOG=rgci_causal=debug,rgci_core=warn`
///
/// Falls back to `rgci_core=info,rgci_causal=info` if `RGCI_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        install(filter);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
    // A host application may already own the global subscriber.
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        init_tracing_with_filter("rgci_core=debug");
        init_tracing();
        init_tracing();
        tracing::debug!("tracing initialized");
    }
}
