// ============================================================================
// Elementary Rounding Algorithms
// Stateless floor/ceiling/half-way rules and their symmetric counterparts
// ============================================================================
//
// Every function here is total over f64. NaN and ±infinity pass straight
// through `floor`/`ceil` and are never special-cased.

/// Function signature shared by every elementary rounding rule.
pub type RoundingAlgorithm = fn(f64) -> f64;

/// Rounds toward −∞.
#[inline]
pub fn round_down(value: f64) -> f64 {
    value.floor()
}

/// Rounds toward +∞.
#[inline]
pub fn round_up(value: f64) -> f64 {
    value.ceil()
}

/// Rounds to the nearest integer, ties toward +∞.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to the nearest integer, ties toward −∞.
#[inline]
pub fn round_half_down(value: f64) -> f64 {
    (value - 0.5).ceil()
}

/// Banker's rounding: ties go to the even neighbour.
///
/// # Example
/// ```text
///  7.5 ->  8.0
///  0.5 ->  0.0
/// -0.5 -> -0.0
/// -7.5 -> -8.0
/// ```
pub fn round_half_even(value: f64) -> f64 {
    if value < 0.0 {
        return -round_half_even(-value);
    }

    let integral = value.trunc();
    let fractional = value.fract();

    if fractional == 0.5 {
        if integral % 2.0 == 0.0 {
            return integral;
        }
        return round_symmetric_up(integral + 0.5);
    }

    // No tie left, either symmetric half rule gives the nearest integer
    round_symmetric_half_up(value)
}

/// Applies `algorithm` to the magnitude of `value` and restores the sign.
///
/// Turns a rule biased toward ±∞ into one biased toward or away from zero.
/// A negative input that rounds to zero yields `-0.0`.
#[inline]
pub fn symmetric(algorithm: RoundingAlgorithm, value: f64) -> f64 {
    let result = algorithm(value.abs());
    if value < 0.0 {
        -result
    } else {
        result
    }
}

/// Rounds toward zero.
#[inline]
pub fn round_symmetric_down(value: f64) -> f64 {
    symmetric(round_down, value)
}

/// Rounds away from zero.
#[inline]
pub fn round_symmetric_up(value: f64) -> f64 {
    symmetric(round_up, value)
}

/// Rounds to the nearest integer, ties toward zero.
#[inline]
pub fn round_symmetric_half_down(value: f64) -> f64 {
    symmetric(round_half_down, value)
}

/// Rounds to the nearest integer, ties away from zero.
#[inline]
pub fn round_symmetric_half_up(value: f64) -> f64 {
    symmetric(round_half_up, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(&str, RoundingAlgorithm); 9] = [
        ("down", round_down),
        ("up", round_up),
        ("half_up", round_half_up),
        ("half_down", round_half_down),
        ("half_even", round_half_even),
        ("symmetric_down", round_symmetric_down),
        ("symmetric_up", round_symmetric_up),
        ("symmetric_half_down", round_symmetric_half_down),
        ("symmetric_half_up", round_symmetric_half_up),
    ];

    #[test]
    fn test_literal_scenarios() {
        assert_eq!(round_down(0.9), 0.0);
        assert_eq!(round_down(-0.9), -1.0);
        assert_eq!(round_up(0.9), 1.0);
        assert_eq!(round_up(-0.9), 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_down(0.5), 0.0);
        assert_eq!(round_half_down(-0.5), -1.0);
        assert_eq!(round_half_even(7.5), 8.0);
        assert_eq!(round_half_even(0.5), 0.0);
        assert_eq!(round_half_even(-0.5), 0.0);
        assert_eq!(round_half_even(-7.5), -8.0);
    }

    #[test]
    fn test_symmetric_down_keeps_signed_zero() {
        let result = round_symmetric_down(-0.9);
        assert_eq!(result, 0.0);
        assert!(result.is_sign_negative());

        assert!(round_symmetric_down(0.9).is_sign_positive());
    }

    #[test]
    fn test_half_even_ties() {
        assert_eq!(round_half_even(1.5), 2.0);
        assert_eq!(round_half_even(2.5), 2.0);
        assert_eq!(round_half_even(3.5), 4.0);
        assert_eq!(round_half_even(-2.5), -2.0);
        assert_eq!(round_half_even(7.4), 7.0);
        assert_eq!(round_half_even(7.6), 8.0);
        assert_eq!(round_half_even(-7.6), -8.0);
    }

    #[test]
    fn test_symmetric_wraps_any_algorithm() {
        assert_eq!(symmetric(round_half_up, -2.5), -3.0);
        assert_eq!(symmetric(round_half_down, -2.5), -2.0);
        assert_eq!(symmetric(round_up, 2.1), 3.0);
    }

    #[test]
    fn test_non_finite_passthrough() {
        for (name, f) in ALL {
            assert!(f(f64::NAN).is_nan(), "{} should keep NaN", name);
            assert_eq!(f(f64::INFINITY), f64::INFINITY, "{}", name);
            assert_eq!(f(f64::NEG_INFINITY), f64::NEG_INFINITY, "{}", name);
        }
    }

    #[test]
    fn test_integers_are_fixed_points() {
        for (name, f) in ALL {
            for n in -5..=5 {
                let x = n as f64;
                assert_eq!(f(x), x, "{} moved integer {}", name, n);
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn idempotent(x in -1.0e9f64..1.0e9) {
                for (name, f) in ALL {
                    let once = f(x);
                    prop_assert_eq!(f(once), once, "{} not idempotent at {}", name, x);
                }
            }

            #[test]
            fn bounded_by_floor_and_ceil(x in -1.0e9f64..1.0e9) {
                for (name, f) in ALL {
                    let r = f(x);
                    prop_assert!(x.floor() <= r && r <= x.ceil(), "{} escaped bounds at {}: {}", name, x, r);
                }
            }

            #[test]
            fn half_even_picks_even_neighbour(n in -1_000_000i64..1_000_000) {
                let r = round_half_even(n as f64 + 0.5);
                prop_assert!(r == n as f64 || r == (n + 1) as f64);
                prop_assert_eq!(r % 2.0, 0.0);
            }
        }
    }

    #[test]
    fn test_symmetric_relation_quickcheck() {
        use quickcheck::{quickcheck, TestResult};

        fn prop(x: f64) -> TestResult {
            if !x.is_finite() {
                return TestResult::discard();
            }
            let (down, up) = if x >= 0.0 {
                (round_down(x), round_up(x))
            } else {
                (-round_down(-x), -round_up(-x))
            };
            TestResult::from_bool(round_symmetric_down(x) == down && round_symmetric_up(x) == up)
        }

        quickcheck(prop as fn(f64) -> TestResult);
    }

    #[test]
    fn test_symmetric_negative_inputs_use_magnitude() {
        for x in [-0.9, -0.1, -1.1, -2.5, -f64::MIN_POSITIVE] {
            assert_eq!(round_symmetric_down(x), -round_down(-x), "down at {}", x);
            assert_eq!(round_symmetric_down(x), round_up(x), "down at {}", x);
            assert_eq!(round_symmetric_up(x), -round_up(-x), "up at {}", x);
            assert_eq!(round_symmetric_up(x), round_down(x), "up at {}", x);
        }
        assert!(round_symmetric_down(-f64::MIN_POSITIVE).is_sign_negative());
    }
}
