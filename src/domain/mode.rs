// ============================================================================
// Rounding Mode
// Typed description of every available rounding strategy
// ============================================================================

use crate::numeric::{self, RoundingAlgorithm, RoundingError};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects one of the seventeen rounding strategies
///
/// Textual form is kebab-case, with an optional `:<midpoint>` suffix on the
/// random variants (`random`, `half-random:0.25`). A bare random name uses
/// [`RoundingMode::DEFAULT_MIDPOINT`].
///
/// The midpoint is only required to be a number. Neither parsing nor
/// deserialization checks the `[0, 1]` range, so anything `Display` prints
/// parses back to the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "kebab-case"))]
pub enum RoundingMode {
    /// Toward −∞
    Down,
    /// Toward +∞
    Up,
    /// Nearest, ties toward −∞
    HalfDown,
    /// Nearest, ties toward +∞
    HalfUp,
    /// Nearest, ties to even (banker's rounding)
    #[default]
    HalfEven,
    /// Toward zero
    SymmetricDown,
    /// Away from zero
    SymmetricUp,
    /// Nearest, ties toward zero
    SymmetricHalfDown,
    /// Nearest, ties away from zero
    SymmetricHalfUp,

    /// Up / Down, alternating
    Alternate,
    /// HalfUp / HalfDown, alternating
    HalfAlternate,
    /// SymmetricUp / SymmetricDown, alternating
    SymmetricAlternate,
    /// SymmetricHalfUp / SymmetricHalfDown, alternating
    SymmetricHalfAlternate,

    /// Up / Down, chosen at random
    Random {
        /// Probability of taking the up branch, expected in [0, 1]
        midpoint: f64,
    },
    /// HalfUp / HalfDown, chosen at random
    HalfRandom { midpoint: f64 },
    /// SymmetricUp / SymmetricDown, chosen at random
    SymmetricRandom { midpoint: f64 },
    /// SymmetricHalfUp / SymmetricHalfDown, chosen at random
    SymmetricHalfRandom { midpoint: f64 },
}

impl RoundingMode {
    /// Midpoint used when a random mode is named without one
    pub const DEFAULT_MIDPOINT: f64 = 0.5;

    /// Every mode that can be built without a random source
    pub const ALL_DETERMINISTIC: [RoundingMode; 13] = [
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::HalfDown,
        RoundingMode::HalfUp,
        RoundingMode::HalfEven,
        RoundingMode::SymmetricDown,
        RoundingMode::SymmetricUp,
        RoundingMode::SymmetricHalfDown,
        RoundingMode::SymmetricHalfUp,
        RoundingMode::Alternate,
        RoundingMode::HalfAlternate,
        RoundingMode::SymmetricAlternate,
        RoundingMode::SymmetricHalfAlternate,
    ];

    /// Kebab-case name without the midpoint suffix
    pub fn name(&self) -> &'static str {
        match self {
            RoundingMode::Down => "down",
            RoundingMode::Up => "up",
            RoundingMode::HalfDown => "half-down",
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::SymmetricDown => "symmetric-down",
            RoundingMode::SymmetricUp => "symmetric-up",
            RoundingMode::SymmetricHalfDown => "symmetric-half-down",
            RoundingMode::SymmetricHalfUp => "symmetric-half-up",
            RoundingMode::Alternate => "alternate",
            RoundingMode::HalfAlternate => "half-alternate",
            RoundingMode::SymmetricAlternate => "symmetric-alternate",
            RoundingMode::SymmetricHalfAlternate => "symmetric-half-alternate",
            RoundingMode::Random { .. } => "random",
            RoundingMode::HalfRandom { .. } => "half-random",
            RoundingMode::SymmetricRandom { .. } => "symmetric-random",
            RoundingMode::SymmetricHalfRandom { .. } => "symmetric-half-random",
        }
    }

    /// Elementary function behind a simple mode, `None` for composites
    pub fn algorithm(&self) -> Option<RoundingAlgorithm> {
        let algorithm: RoundingAlgorithm = match self {
            RoundingMode::Down => numeric::round_down,
            RoundingMode::Up => numeric::round_up,
            RoundingMode::HalfDown => numeric::round_half_down,
            RoundingMode::HalfUp => numeric::round_half_up,
            RoundingMode::HalfEven => numeric::round_half_even,
            RoundingMode::SymmetricDown => numeric::round_symmetric_down,
            RoundingMode::SymmetricUp => numeric::round_symmetric_up,
            RoundingMode::SymmetricHalfDown => numeric::round_symmetric_half_down,
            RoundingMode::SymmetricHalfUp => numeric::round_symmetric_half_up,
            _ => return None,
        };
        Some(algorithm)
    }

    /// Whether repeated calls on the same rounder may differ
    pub fn is_stateful(&self) -> bool {
        self.algorithm().is_none()
    }

    pub fn requires_random_source(&self) -> bool {
        self.midpoint().is_some()
    }

    pub fn midpoint(&self) -> Option<f64> {
        match self {
            RoundingMode::Random { midpoint }
            | RoundingMode::HalfRandom { midpoint }
            | RoundingMode::SymmetricRandom { midpoint }
            | RoundingMode::SymmetricHalfRandom { midpoint } => Some(*midpoint),
            _ => None,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.midpoint() {
            Some(midpoint) => write!(f, "{}:{}", self.name(), midpoint),
            None => f.write_str(self.name()),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = RoundingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (name, raw_midpoint) = match trimmed.split_once(':') {
            Some((name, raw)) => (name, Some(raw.trim())),
            None => (trimmed, None),
        };
        let name = name.trim().to_ascii_lowercase();

        let random = |build: fn(f64) -> RoundingMode| -> Result<RoundingMode, RoundingError> {
            let midpoint = match raw_midpoint {
                Some(raw) => parse_midpoint(raw)?,
                None => Self::DEFAULT_MIDPOINT,
            };
            Ok(build(midpoint))
        };

        match name.as_str() {
            "random" => return random(|midpoint| RoundingMode::Random { midpoint }),
            "half-random" => return random(|midpoint| RoundingMode::HalfRandom { midpoint }),
            "symmetric-random" => {
                return random(|midpoint| RoundingMode::SymmetricRandom { midpoint })
            },
            "symmetric-half-random" => {
                return random(|midpoint| RoundingMode::SymmetricHalfRandom { midpoint })
            },
            _ => {},
        }

        if raw_midpoint.is_some() {
            return Err(RoundingError::UnknownMode(trimmed.to_string()));
        }

        Self::ALL_DETERMINISTIC
            .iter()
            .copied()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| RoundingError::UnknownMode(trimmed.to_string()))
    }
}

fn parse_midpoint(raw: &str) -> Result<f64, RoundingError> {
    raw.parse::<f64>()
        .map_err(|_| RoundingError::InvalidMidpoint(raw.to_string()))
}
