// ============================================================================
// Simple Rounder
// Wraps a single stateless rounding algorithm
// ============================================================================

use crate::interfaces::Rounder;
use crate::numeric::{self, RoundingAlgorithm};
use std::fmt;

/// Rounder that always applies the same elementary rule
///
/// Stateless and `Copy`; [`SimpleRounder::apply`] works through a shared
/// reference, so one instance can be used from many threads at once.
///
/// # Example
/// ```
/// use rounding_strategies::prelude::*;
///
/// let mut rounder = SimpleRounder::half_even();
/// assert_eq!(rounder.round(2.5), 2.0);
/// assert_eq!(rounder.round(3.5), 4.0);
/// ```
#[derive(Clone, Copy)]
pub struct SimpleRounder {
    name: &'static str,
    algorithm: RoundingAlgorithm,
}

impl SimpleRounder {
    /// Wrap a caller-supplied rounding function
    pub fn new(name: &'static str, algorithm: RoundingAlgorithm) -> Self {
        Self { name, algorithm }
    }

    pub fn down() -> Self {
        Self::new("down", numeric::round_down)
    }

    pub fn up() -> Self {
        Self::new("up", numeric::round_up)
    }

    pub fn half_down() -> Self {
        Self::new("half-down", numeric::round_half_down)
    }

    pub fn half_up() -> Self {
        Self::new("half-up", numeric::round_half_up)
    }

    /// Banker's rounding
    pub fn half_even() -> Self {
        Self::new("half-even", numeric::round_half_even)
    }

    pub fn symmetric_down() -> Self {
        Self::new("symmetric-down", numeric::round_symmetric_down)
    }

    pub fn symmetric_up() -> Self {
        Self::new("symmetric-up", numeric::round_symmetric_up)
    }

    pub fn symmetric_half_down() -> Self {
        Self::new("symmetric-half-down", numeric::round_symmetric_half_down)
    }

    pub fn symmetric_half_up() -> Self {
        Self::new("symmetric-half-up", numeric::round_symmetric_half_up)
    }

    /// Round without needing exclusive access
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        (self.algorithm)(value)
    }

    pub fn algorithm(&self) -> RoundingAlgorithm {
        self.algorithm
    }
}

impl Rounder for SimpleRounder {
    #[inline]
    fn round(&mut self, value: f64) -> f64 {
        self.apply(value)
    }

    fn name(&self) -> &str {
        self.name
    }
}

impl fmt::Debug for SimpleRounder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SimpleRounder").field(&self.name).finish()
    }
}
