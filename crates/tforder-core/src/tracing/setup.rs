//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "TFORDER_LOG";

/// Directive used when neither `TFORDER_LOG` nor a caller default is given.
pub const DEFAULT_DIRECTIVE: &str = "tforder=warn";

/// Initialize logging with the compiled default filter.
///
/// Reads `TFORDER_LOG` for per-subsystem log levels, e.g.
/// `TFORDER_LOG=tforder_analysis::scanner=debug,tforder_analysis::order=trace`.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_DIRECTIVE);
}

/// Initialize logging, falling back to `default_directive` when
/// `TFORDER_LOG` is unset or invalid. Output goes to stderr so stdout stays
/// reserved for the report.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing_with_default(default_directive: &str) {
    INIT.call_once(|| {
        let filter = build_filter(default_directive);

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}

/// The filter `init_tracing_with_default` installs: `TFORDER_LOG` if it
/// parses, else `default_directive` if it parses, else `DEFAULT_DIRECTIVE`.
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
