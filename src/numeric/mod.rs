// ============================================================================
// Numeric Module
// Elementary rounding rules and error types
// ============================================================================
//
// This module provides:
// - RoundingAlgorithm: the `fn(f64) -> f64` signature every rule satisfies
// - Floor/ceiling/half-way rules plus their symmetric variants
// - RoundingError: errors from the configuration layer
//
// Design principles:
// - Pure functions, no state, no allocation
// - NaN and infinities are inherited from floor/ceil, never special-cased
// - Signed zero is preserved by the symmetric wrapper

mod algorithms;
mod errors;

pub use algorithms::{
    round_down, round_half_down, round_half_even, round_half_up, round_symmetric_down,
    round_symmetric_half_down, round_symmetric_half_up, round_symmetric_up, round_up, symmetric,
    RoundingAlgorithm,
};
pub use errors::{RoundingError, RoundingResult};
