// ============================================================================
// Utilities Module
// Optional helpers for binaries and demos
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_tracing;
