// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod direction;
mod random_source;
mod rounder;

pub use direction::RoundingDirection;
#[cfg(feature = "rand")]
pub use random_source::RngSource;
pub use random_source::RandomSource;
pub use rounder::Rounder;
