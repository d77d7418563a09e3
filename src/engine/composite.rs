// ============================================================================
// Composite Rounder
// Delegates each call to an up or down branch chosen by a direction selector
// ============================================================================

use crate::engine::direction::{AlternatingDirection, RandomDirection};
use crate::engine::SimpleRounder;
use crate::interfaces::{RandomSource, Rounder, RoundingDirection};
use std::fmt;

/// Rounder pairing an "up" rule with a "down" rule
///
/// Every call queries the direction exactly once and evaluates only the
/// selected branch. Over many calls the two biases cancel out.
///
/// # Example
/// ```text
/// alternate: round(0.9) -> 1.0   (up)
///            round(0.9) -> 0.0   (down)
///            round(0.9) -> 1.0   (up)
/// ```
pub struct CompositeRounder {
    name: &'static str,
    up: Box<dyn Rounder>,
    down: Box<dyn Rounder>,
    direction: Box<dyn RoundingDirection>,
}

impl CompositeRounder {
    /// Build a composite from arbitrary branches and selector
    pub fn new(
        up: Box<dyn Rounder>,
        down: Box<dyn Rounder>,
        direction: Box<dyn RoundingDirection>,
    ) -> Self {
        Self::named("composite", up, down, direction)
    }

    fn named(
        name: &'static str,
        up: Box<dyn Rounder>,
        down: Box<dyn Rounder>,
        direction: Box<dyn RoundingDirection>,
    ) -> Self {
        Self {
            name,
            up,
            down,
            direction,
        }
    }

    fn pair(
        name: &'static str,
        up: SimpleRounder,
        down: SimpleRounder,
        direction: impl RoundingDirection + 'static,
    ) -> Self {
        Self::named(name, Box::new(up), Box::new(down), Box::new(direction))
    }

    // ========================================================================
    // Alternating Constructors
    // ========================================================================

    /// Up / Down, alternating starting with Up
    pub fn alternate() -> Self {
        Self::pair(
            "alternate",
            SimpleRounder::up(),
            SimpleRounder::down(),
            AlternatingDirection::new(),
        )
    }

    /// HalfUp / HalfDown, alternating starting with HalfUp
    pub fn half_alternate() -> Self {
        Self::pair(
            "half-alternate",
            SimpleRounder::half_up(),
            SimpleRounder::half_down(),
            AlternatingDirection::new(),
        )
    }

    /// SymmetricUp / SymmetricDown, alternating starting with SymmetricUp
    pub fn symmetric_alternate() -> Self {
        Self::pair(
            "symmetric-alternate",
            SimpleRounder::symmetric_up(),
            SimpleRounder::symmetric_down(),
            AlternatingDirection::new(),
        )
    }

    /// SymmetricHalfUp / SymmetricHalfDown, alternating starting with SymmetricHalfUp
    pub fn symmetric_half_alternate() -> Self {
        Self::pair(
            "symmetric-half-alternate",
            SimpleRounder::symmetric_half_up(),
            SimpleRounder::symmetric_half_down(),
            AlternatingDirection::new(),
        )
    }

    // ========================================================================
    // Random Constructors
    // ========================================================================

    /// Up / Down, going up when `source` draws below `midpoint`
    pub fn random(midpoint: f64, source: impl RandomSource + 'static) -> Self {
        Self::pair(
            "random",
            SimpleRounder::up(),
            SimpleRounder::down(),
            RandomDirection::new(midpoint, source),
        )
    }

    /// HalfUp / HalfDown, going up when `source` draws below `midpoint`
    pub fn half_random(midpoint: f64, source: impl RandomSource + 'static) -> Self {
        Self::pair(
            "half-random",
            SimpleRounder::half_up(),
            SimpleRounder::half_down(),
            RandomDirection::new(midpoint, source),
        )
    }

    /// SymmetricUp / SymmetricDown, going up when `source` draws below `midpoint`
    pub fn symmetric_random(midpoint: f64, source: impl RandomSource + 'static) -> Self {
        Self::pair(
            "symmetric-random",
            SimpleRounder::symmetric_up(),
            SimpleRounder::symmetric_down(),
            RandomDirection::new(midpoint, source),
        )
    }

    /// SymmetricHalfUp / SymmetricHalfDown, going up when `source` draws below `midpoint`
    pub fn symmetric_half_random(midpoint: f64, source: impl RandomSource + 'static) -> Self {
        Self::pair(
            "symmetric-half-random",
            SimpleRounder::symmetric_half_up(),
            SimpleRounder::symmetric_half_down(),
            RandomDirection::new(midpoint, source),
        )
    }

    pub(crate) fn with_boxed_source(
        name: &'static str,
        up: SimpleRounder,
        down: SimpleRounder,
        midpoint: f64,
        source: Box<dyn RandomSource>,
    ) -> Self {
        Self::pair(name, up, down, RandomDirection::from_boxed(midpoint, source))
    }
}

impl Rounder for CompositeRounder {
    fn round(&mut self, value: f64) -> f64 {
        let is_up = self.direction.is_up();
        let rounded = if is_up {
            self.up.round(value)
        } else {
            self.down.round(value)
        };

        tracing::trace!(
            rounder = self.name,
            direction = if is_up { "up" } else { "down" },
            value,
            rounded,
            "composite rounding"
        );

        rounded
    }

    fn name(&self) -> &str {
        self.name
    }
}

impl fmt::Debug for CompositeRounder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeRounder")
            .field("name", &self.name)
            .field("up", &self.up.name())
            .field("down", &self.down.name())
            .finish_non_exhaustive()
    }
}
