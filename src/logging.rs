//! Logging setup.
//!
//! Built on `tracing` and `tracing-subscriber`; the log level comes from
//! the `RUST_LOG` environment variable.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes logging for library consumers that want it.
///
/// Defaults to `info` when `RUST_LOG` is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Initializes logging for tests.
///
/// Verbose by default and safe to call repeatedly.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
