// ============================================================================
// Logging
// Optional tracing subscriber setup (feature "logging")
// ============================================================================

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global tracing subscriber for the reader and summation events.
///
/// Reads `RUST_LOG`; defaults to `warn` if unset. Output: stderr, compact format.
///
/// # Errors
/// Fails if a global subscriber is already installed.
///
/// # Example
/// ```bash
/// RUST_LOG=text_decimal=debug cargo run --example basic_usage --features logging
/// ```
pub fn init() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // The first call may lose a race with another test; the second never succeeds
        let _ = init();
        assert!(init().is_err());
    }
}
