//! Power-law index sampling.

use rand::RngCore;

use super::unit;

/// Draw an index in `[0, n - 1]` with a heavy head.
///
/// A unit draw `u` is pushed through the Pareto-like transform
/// `x = u^(-1 / (skew - 1))`, which is always at least 1 and unbounded above.
/// The raw value is folded back into range with `x mod n` and clamped, so the
/// result stays in bounds however extreme the draw. Larger `skew` values
/// shrink the exponent and concentrate more mass on the low indices.
///
/// `skew` must be greater than 1. Returns 0 without drawing when `n` is 0.
pub fn skewed_index<R: RngCore + ?Sized>(rng: &mut R, n: u64, skew: f64) -> u64 {
    debug_assert!(skew > 1.0, "skew must be greater than 1, got {skew}");
    if n == 0 {
        return 0;
    }

    let u = unit(rng);
    let x = u.powf(-1.0 / (skew - 1.0));
    if !x.is_finite() {
        // u == 0 sends x to infinity; treat it as the extreme head.
        return 0;
    }

    let upper = (n - 1) as f64;
    let folded = (x % n as f64).clamp(0.0, upper);
    folded.floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_stays_in_bounds() {
        let mut rng = Mulberry32::new(99);
        for n in [1u64, 2, 3, 17, 1000, 1_000_000] {
            for _ in 0..5_000 {
                let idx = skewed_index(&mut rng, n, 1.2);
                assert!(idx < n, "index {idx} out of bounds for n={n}");
            }
        }
    }

    #[test]
    fn test_empty_population_returns_zero() {
        let mut rng = Mulberry32::new(1);
        let before = rng.clone();
        assert_eq!(skewed_index(&mut rng, 0, 1.25), 0);
        assert_eq!(rng, before);
    }

    #[test]
    fn test_zero_draw_folds_to_head() {
        // StepRng yielding 0 forever gives u == 0 and x == infinity.
        let mut rng = StepRng::new(0, 0);
        assert_eq!(skewed_index(&mut rng, 1000, 1.25), 0);
    }

    #[test]
    fn test_top_decile_gets_majority_of_draws() {
        let mut rng = Mulberry32::new(7);
        let n = 1000u64;
        let draws = 100_000;
        let mut histogram = vec![0u64; n as usize];

        for _ in 0..draws {
            histogram[skewed_index(&mut rng, n, 1.25) as usize] += 1;
        }

        let head: u64 = histogram[..100].iter().sum();
        let share = head as f64 / draws as f64;
        assert!(share > 0.5, "top 10% received only {share:.3} of draws");
    }

    #[test]
    fn test_higher_skew_concentrates_more() {
        let n = 1000u64;
        let draws = 50_000;
        let head_share = |skew: f64| {
            let mut rng = Mulberry32::new(13);
            let head = (0..draws)
                .filter(|_| skewed_index(&mut rng, n, skew) < 10)
                .count();
            head as f64 / draws as f64
        };

        assert!(head_share(1.5) > head_share(1.1));
    }
}
