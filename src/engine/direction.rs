// ============================================================================
// Direction Selectors
// Alternating and random-threshold implementations of RoundingDirection
// ============================================================================

use crate::interfaces::{RandomSource, RoundingDirection};
use std::fmt;

/// Deterministic selector toggling between up and down
///
/// The flag starts at `false` and is negated before being read, so a fresh
/// selector yields `true, false, true, false, ...`.
#[derive(Debug, Clone, Default)]
pub struct AlternatingDirection {
    toggle: bool,
}

impl AlternatingDirection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoundingDirection for AlternatingDirection {
    fn is_up(&mut self) -> bool {
        self.toggle = !self.toggle;
        self.toggle
    }
}

/// Selector that goes up when the drawn value is strictly below `midpoint`
///
/// `midpoint` is the probability of rounding up and is expected to lie in
/// `[0, 1]`. It is not checked: `0.0` never goes up and anything above `1.0`
/// always does.
pub struct RandomDirection {
    midpoint: f64,
    source: Box<dyn RandomSource>,
}

impl RandomDirection {
    pub fn new(midpoint: f64, source: impl RandomSource + 'static) -> Self {
        Self::from_boxed(midpoint, Box::new(source))
    }

    pub fn from_boxed(midpoint: f64, source: Box<dyn RandomSource>) -> Self {
        Self { midpoint, source }
    }

    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }
}

impl RoundingDirection for RandomDirection {
    fn is_up(&mut self) -> bool {
        self.source.next_f64() < self.midpoint
    }
}

impl fmt::Debug for RandomDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomDirection")
            .field("midpoint", &self.midpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_sequence() {
        let mut direction = AlternatingDirection::new();
        let seq: Vec<bool> = (0..6).map(|_| direction.is_up()).collect();
        assert_eq!(seq, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn test_alternating_instances_are_independent() {
        let mut a = AlternatingDirection::new();
        let mut b = AlternatingDirection::new();
        assert!(a.is_up());
        assert!(!a.is_up());
        assert!(b.is_up());
    }

    #[test]
    fn test_random_fixed_source() {
        let mut below = RandomDirection::new(0.5, || 0.4);
        let mut equal = RandomDirection::new(0.5, || 0.5);
        let mut above = RandomDirection::new(0.5, || 0.6);

        for _ in 0..3 {
            assert!(below.is_up());
            assert!(!equal.is_up());
            assert!(!above.is_up());
        }
    }

    #[test]
    fn test_random_midpoint_extremes() {
        let mut never = RandomDirection::new(0.0, || 0.0);
        let mut always = RandomDirection::new(1.0, || 0.999_999);
        assert!(!never.is_up());
        assert!(always.is_up());
        assert_eq!(never.midpoint(), 0.0);
    }

    #[test]
    fn test_random_threshold_quickcheck() {
        use quickcheck::{quickcheck, TestResult};

        fn prop(v: f64, m: f64) -> TestResult {
            if v.is_nan() || m.is_nan() {
                return TestResult::discard();
            }
            let mut direction = RandomDirection::new(m, move || v);
            TestResult::from_bool(direction.is_up() == (v < m))
        }

        quickcheck(prop as fn(f64, f64) -> TestResult);
    }

    #[test]
    fn test_random_frequency_follows_midpoint() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(42);
        let mut direction = RandomDirection::new(0.25, move || rng.gen::<f64>());

        let draws = 20_000;
        let ups = (0..draws).filter(|_| direction.is_up()).count();
        let ratio = ups as f64 / draws as f64;
        assert!((ratio - 0.25).abs() < 0.02, "up ratio {}", ratio);
    }
}
