// ============================================================================
// Engine Module
// Rounder implementations, direction selectors and construction helpers
// ============================================================================

mod composite;
mod shared;
mod simple;

pub mod direction;
pub mod factory;

pub use composite::CompositeRounder;
pub use direction::{AlternatingDirection, RandomDirection};
pub use factory::{create_from_config, RounderBuilder};
pub use shared::SharedRounder;
pub use simple::SimpleRounder;
