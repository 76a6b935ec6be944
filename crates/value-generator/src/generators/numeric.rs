//! Numeric value generators.

use super::ordered;
use rand::Rng;

/// Generate a random integer in the given range (inclusive).
///
/// Inverted bounds are swapped.
pub fn random_integer<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (min, max) = ordered(min, max);
    rng.random_range(min..=max)
}

/// Generate a random float in the given range (inclusive).
///
/// Inverted bounds are swapped and infinite bounds are clamped to the finite
/// range. A NaN bound yields NaN.
pub fn random_double<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    let (min, max) = ordered(
        min.clamp(f64::MIN, f64::MAX),
        max.clamp(f64::MIN, f64::MAX),
    );
    if min == max {
        return min;
    }
    if (max - min).is_finite() {
        return rng.random_range(min..=max);
    }

    // Span overflows f64; interpolate between the bounds instead
    let t: f64 = rng.random();
    (min * (1.0 - t) + max * t).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_integer_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = random_integer(&mut rng, 10, 20);
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn test_random_integer_swaps_inverted_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = random_integer(&mut rng, 5, -5);
            assert!((-5..=5).contains(&value));
        }
    }

    #[test]
    fn test_random_double_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = random_double(&mut rng, 0.5, 100.0);
            assert!((0.5..=100.0).contains(&value));
        }
        assert_eq!(random_double(&mut rng, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_random_double_extreme_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = random_double(&mut rng, f64::MIN, f64::MAX);
            assert!(value.is_finite());
        }

        let value = random_double(&mut rng, f64::NEG_INFINITY, 0.0);
        assert!(value.is_finite() && value <= 0.0);
        assert!(random_double(&mut rng, f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(
            random_integer(&mut rng1, 0, 1_000_000),
            random_integer(&mut rng2, 0, 1_000_000)
        );
    }
}
