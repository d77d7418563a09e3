// ============================================================================
// Rounding Strategies Library
// Interchangeable rounding rules with bias-cancelling composites
// ============================================================================

//! # Rounding Strategies
//!
//! A small library of interchangeable floating-point rounding strategies.
//!
//! ## Features
//!
//! - **Elementary rules**: floor, ceiling, half-up, half-down, half-even
//!   (banker's rounding) and their symmetric (toward/away from zero) variants
//! - **Pluggable strategies** behind one [`Rounder`](interfaces::Rounder) trait
//! - **Bias cancelling composites** that switch between an up and a down rule,
//!   either alternately or at random with an injected source
//! - **Mode configuration** parseable from strings and, with the `serde`
//!   feature, serializable
//!
//! NaN and infinities pass through the underlying `floor`/`ceil` unchanged.
//!
//! ## Example
//!
//! ```rust
//! use rounding_strategies::prelude::*;
//!
//! // Stateless rule
//! let mut bankers = SimpleRounder::half_even();
//! assert_eq!(bankers.round(7.5), 8.0);
//! assert_eq!(bankers.round(0.5), 0.0);
//!
//! // Alternating composite: up first, then down
//! let mut alternate = CompositeRounder::alternate();
//! assert_eq!(alternate.round(0.9), 1.0);
//! assert_eq!(alternate.round(0.9), 0.0);
//!
//! // Random composite with an injected source
//! let mut random = CompositeRounder::random(0.5, || 0.6);
//! assert_eq!(random.round(0.9), 0.0);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::RoundingMode;
    pub use crate::engine::{
        create_from_config, AlternatingDirection, CompositeRounder, RandomDirection,
        RounderBuilder, SharedRounder, SimpleRounder,
    };
    #[cfg(feature = "rand")]
    pub use crate::interfaces::RngSource;
    pub use crate::interfaces::{RandomSource, Rounder, RoundingDirection};
    pub use crate::numeric::{RoundingAlgorithm, RoundingError, RoundingResult};
}
