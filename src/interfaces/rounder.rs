// ============================================================================
// Rounder Interface
// Defines the contract shared by every rounding strategy
// ============================================================================

/// Strategy pattern interface for rounding
/// Implementations: SimpleRounder (one rule), CompositeRounder (up/down pair)
pub trait Rounder: Send {
    /// Round a single value
    ///
    /// Takes `&mut self` because composite strategies advance their
    /// direction selector on every call.
    fn round(&mut self, value: f64) -> f64;

    /// Get the strategy name for logging
    fn name(&self) -> &str;
}

impl<R: Rounder + ?Sized> Rounder for Box<R> {
    fn round(&mut self, value: f64) -> f64 {
        (**self).round(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
