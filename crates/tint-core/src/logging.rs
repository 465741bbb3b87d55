#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Installs a `tracing-subscriber` formatter for binaries. The filter comes from the
//! `TINT_LOG` environment variable (`RUST_LOG` syntax). With the
//! `tracing-json` feature, output is one JSON object per line.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TINT_LOG";

/// Filter used when nothing is configured.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a global subscriber writing to stderr with `filter`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init(filter: &str) -> bool {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    #[cfg(feature = "tracing-json")]
    let result = builder.json().try_init();
    #[cfg(not(feature = "tracing-json"))]
    let result = builder.try_init();

    result.is_ok()
}

/// [`init`] with the filter from `TINT_LOG`, defaulting to `warn`.
pub fn init_from_env() -> bool {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    init(&filter)
}

