// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries that embed the library
// ============================================================================

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`)
///
/// Composite rounders log every decision at `trace` level, so
/// `RUST_LOG=rounding_strategies=trace` shows the up/down sequence.
///
/// Returns an error instead of panicking if a global subscriber is
/// already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_gracefully() {
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
