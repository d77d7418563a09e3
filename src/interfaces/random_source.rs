// ============================================================================
// Random Source Interface
// Injected generator of uniform values for the random direction selector
// ============================================================================

/// Source of uniformly distributed values in `[0, 1)`
///
/// Any `FnMut() -> f64` closure qualifies, which keeps test doubles trivial:
/// ```
/// use rounding_strategies::interfaces::RandomSource;
///
/// let mut fixed = || 0.6;
/// assert_eq!(fixed.next_f64(), 0.6);
/// ```
pub trait RandomSource: Send {
    /// Draw the next value
    fn next_f64(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64 + Send,
{
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Adapter turning any `rand` generator into a [`RandomSource`]
#[cfg(feature = "rand")]
pub struct RngSource<R> {
    rng: R,
}

#[cfg(feature = "rand")]
impl<R: rand::Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "rand")]
impl RngSource<rand::rngs::StdRng> {
    /// Deterministic source for reproducible sequences
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::from_entropy())
    }
}

#[cfg(feature = "rand")]
impl<R: rand::Rng + Send> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        // Standard distribution for f64 is uniform over [0, 1)
        self.rng.gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_source() {
        let mut values = vec![0.1, 0.2, 0.3].into_iter();
        let mut source = move || values.next().unwrap_or(0.0);
        assert_eq!(source.next_f64(), 0.1);
        assert_eq!(source.next_f64(), 0.2);
        assert_eq!(source.next_f64(), 0.3);
        assert_eq!(source.next_f64(), 0.0);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_seeded_source_in_unit_interval() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        for _ in 0..1000 {
            let v = a.next_f64();
            assert!((0.0..1.0).contains(&v));
            assert_eq!(v, b.next_f64());
        }
    }
}
