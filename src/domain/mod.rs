// ============================================================================
// Domain Models Module
// Configuration value objects describing rounding strategies
// ============================================================================

pub mod mode;

pub use mode::RoundingMode;
