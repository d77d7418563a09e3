// ============================================================================
// Rounder Factory
// Creates rounders from a RoundingMode
// ============================================================================

use crate::domain::RoundingMode;
use crate::engine::{CompositeRounder, SharedRounder, SimpleRounder};
use crate::interfaces::{RandomSource, Rounder};
use crate::numeric::{RoundingError, RoundingResult};

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a rounder from a mode description
///
/// # Arguments
/// * `mode` - Strategy to build
/// * `source` - Random source, only consumed by the random modes
///
/// # Returns
/// * `RoundingResult<Box<dyn Rounder>>` - Rounder, or `MissingRandomSource`
///   when a random mode is requested without a source
///
/// # Example
/// ```
/// use rounding_strategies::prelude::*;
///
/// let mode: RoundingMode = "half-even".parse().unwrap();
/// let mut rounder = create_from_config(mode, None).unwrap();
/// assert_eq!(rounder.round(2.5), 2.0);
///
/// let mode: RoundingMode = "random:0.5".parse().unwrap();
/// let mut rounder = create_from_config(mode, Some(Box::new(|| 0.6))).unwrap();
/// assert_eq!(rounder.round(0.9), 0.0);
/// ```
pub fn create_from_config(
    mode: RoundingMode,
    source: Option<Box<dyn RandomSource>>,
) -> RoundingResult<Box<dyn Rounder>> {
    let rounder = create_rounder(mode, source)?;
    tracing::debug!(mode = %mode, rounder = rounder.name(), "created rounder");
    Ok(rounder)
}

fn create_rounder(
    mode: RoundingMode,
    source: Option<Box<dyn RandomSource>>,
) -> RoundingResult<Box<dyn Rounder>> {
    let rounder: Box<dyn Rounder> = match mode {
        RoundingMode::Down => Box::new(SimpleRounder::down()),
        RoundingMode::Up => Box::new(SimpleRounder::up()),
        RoundingMode::HalfDown => Box::new(SimpleRounder::half_down()),
        RoundingMode::HalfUp => Box::new(SimpleRounder::half_up()),
        RoundingMode::HalfEven => Box::new(SimpleRounder::half_even()),
        RoundingMode::SymmetricDown => Box::new(SimpleRounder::symmetric_down()),
        RoundingMode::SymmetricUp => Box::new(SimpleRounder::symmetric_up()),
        RoundingMode::SymmetricHalfDown => Box::new(SimpleRounder::symmetric_half_down()),
        RoundingMode::SymmetricHalfUp => Box::new(SimpleRounder::symmetric_half_up()),

        RoundingMode::Alternate => Box::new(CompositeRounder::alternate()),
        RoundingMode::HalfAlternate => Box::new(CompositeRounder::half_alternate()),
        RoundingMode::SymmetricAlternate => Box::new(CompositeRounder::symmetric_alternate()),
        RoundingMode::SymmetricHalfAlternate => {
            Box::new(CompositeRounder::symmetric_half_alternate())
        },

        RoundingMode::Random { midpoint } => Box::new(CompositeRounder::with_boxed_source(
            mode.name(),
            SimpleRounder::up(),
            SimpleRounder::down(),
            midpoint,
            require_source(mode, source)?,
        )),
        RoundingMode::HalfRandom { midpoint } => Box::new(CompositeRounder::with_boxed_source(
            mode.name(),
            SimpleRounder::half_up(),
            SimpleRounder::half_down(),
            midpoint,
            require_source(mode, source)?,
        )),
        RoundingMode::SymmetricRandom { midpoint } => {
            Box::new(CompositeRounder::with_boxed_source(
                mode.name(),
                SimpleRounder::symmetric_up(),
                SimpleRounder::symmetric_down(),
                midpoint,
                require_source(mode, source)?,
            ))
        },
        RoundingMode::SymmetricHalfRandom { midpoint } => {
            Box::new(CompositeRounder::with_boxed_source(
                mode.name(),
                SimpleRounder::symmetric_half_up(),
                SimpleRounder::symmetric_half_down(),
                midpoint,
                require_source(mode, source)?,
            ))
        },
    };

    Ok(rounder)
}

fn require_source(
    mode: RoundingMode,
    source: Option<Box<dyn RandomSource>>,
) -> RoundingResult<Box<dyn RandomSource>> {
    source.ok_or(RoundingError::MissingRandomSource(mode))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for rounders with a fluent API
///
/// # Example
/// ```
/// use rounding_strategies::prelude::*;
///
/// let mut rounder = RounderBuilder::new()
///     .half_random(0.5)
///     .random_source(|| 0.25)
///     .build()
///     .unwrap();
/// assert_eq!(rounder.round(2.5), 3.0);
/// ```
#[derive(Default)]
pub struct RounderBuilder {
    mode: RoundingMode,
    source: Option<Box<dyn RandomSource>>,
}

impl RounderBuilder {
    /// Create a builder for the default mode (half-even)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: RoundingMode) -> Self {
        self.mode = mode;
        self
    }

    // ========================================================================
    // Mode Shortcuts
    // ========================================================================

    pub fn half_even(self) -> Self {
        self.mode(RoundingMode::HalfEven)
    }

    pub fn half_up(self) -> Self {
        self.mode(RoundingMode::HalfUp)
    }

    pub fn symmetric_half_up(self) -> Self {
        self.mode(RoundingMode::SymmetricHalfUp)
    }

    pub fn alternate(self) -> Self {
        self.mode(RoundingMode::Alternate)
    }

    pub fn half_alternate(self) -> Self {
        self.mode(RoundingMode::HalfAlternate)
    }

    pub fn random(self, midpoint: f64) -> Self {
        self.mode(RoundingMode::Random { midpoint })
    }

    pub fn half_random(self, midpoint: f64) -> Self {
        self.mode(RoundingMode::HalfRandom { midpoint })
    }

    // ========================================================================
    // Random Source
    // ========================================================================

    /// Supply the generator used by random modes
    pub fn random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn build(self) -> RoundingResult<Box<dyn Rounder>> {
        create_from_config(self.mode, self.source)
    }

    /// Build behind a mutex so the rounder can be shared across threads
    pub fn build_shared(self) -> RoundingResult<SharedRounder> {
        self.build().map(SharedRounder::from_boxed)
    }
}
