// ============================================================================
// Rounding Direction Interface
// Decides per call whether a composite rounder goes up or down
// ============================================================================

/// Direction selector consulted once per `round` call of a composite rounder
pub trait RoundingDirection: Send {
    /// Returns `true` for the up branch, `false` for the down branch
    fn is_up(&mut self) -> bool;
}
