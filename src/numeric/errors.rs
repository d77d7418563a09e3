// ============================================================================
// Rounding Errors
// Error types for mode parsing and rounder construction
// ============================================================================

use crate::domain::RoundingMode;
use std::fmt;

/// Errors raised while turning a mode description into a rounder.
///
/// Rounding itself never fails; these only come from the configuration layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundingError {
    /// Mode name did not match any known strategy
    UnknownMode(String),
    /// Midpoint suffix was not a number
    InvalidMidpoint(String),
    /// A random mode was requested without a random source
    MissingRandomSource(RoundingMode),
}

impl fmt::Display for RoundingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingError::UnknownMode(name) => write!(f, "unknown rounding mode: {}", name),
            RoundingError::InvalidMidpoint(raw) => {
                write!(f, "invalid midpoint: {} (expected a number)", raw)
            },
            RoundingError::MissingRandomSource(mode) => {
                write!(f, "rounding mode {} requires a random source", mode)
            },
        }
    }
}

impl std::error::Error for RoundingError {}

/// Result type alias for rounding configuration
pub type RoundingResult<T> = Result<T, RoundingError>;
