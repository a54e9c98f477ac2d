//! Distribution samplers built on a unit-interval draw.
//!
//! Every sampler takes the RNG explicitly and consumes a fixed number of
//! draws, so the sequence of calls fully determines the output. Samplers are
//! generic over [`RngCore`] and draw one `next_u32` per unit value.

pub mod sentence;
pub mod skewed;
pub mod timestamp;

use rand::RngCore;

pub use sentence::{synthetic_sentence, VOCABULARY};
pub use skewed::skewed_index;
pub use timestamp::iso_timestamp;

/// 2^32, the width of one `next_u32` draw.
const U32_RANGE: f64 = 4_294_967_296.0;

/// One uniform draw in `[0, 1)`.
pub fn unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.next_u32()) / U32_RANGE
}

/// Uniform integer in `[min, max]` (both inclusive). One draw.
pub fn uniform_int<R: RngCore + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let span = (max - min + 1) as f64;
    (unit(rng) * span).floor() as i64 + min
}

/// Uniform 1-based id in `[1, n]`. One draw.
pub fn uniform_id<R: RngCore + ?Sized>(rng: &mut R, n: u64) -> u64 {
    uniform_int(rng, 1, n as i64) as u64
}

/// Uniform pick from `items`. Returns `None` without drawing when `items`
/// is empty.
pub fn uniform_choice<'a, R: RngCore + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = (unit(rng) * items.len() as f64).floor() as usize;
    items.get(idx)
}

/// Pick a 1-based id from a population of `n`, favouring low ids.
///
/// With probability `skew_weight` the id comes from [`skewed_index`] with the
/// given `skew`; otherwise it is uniform. Two draws either way.
pub fn skewed_or_uniform_id<R: RngCore + ?Sized>(
    rng: &mut R,
    n: u64,
    skew_weight: f64,
    skew: f64,
) -> u64 {
    if unit(rng) < skew_weight {
        skewed_index(rng, n, skew) + 1
    } else {
        uniform_id(rng, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;

    #[test]
    fn test_unit_range() {
        let mut rng = Mulberry32::new(3);
        for _ in 0..10_000 {
            let u = unit(&mut rng);
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_uniform_int_inclusive_bounds() {
        let mut rng = Mulberry32::new(11);
        let mut seen = [false; 5];

        for _ in 0..10_000 {
            let v = uniform_int(&mut rng, -2, 2);
            assert!((-2..=2).contains(&v), "out of range: {v}");
            seen[(v + 2) as usize] = true;
        }

        assert!(seen.iter().all(|s| *s), "not every value drawn: {seen:?}");
    }

    #[test]
    fn test_uniform_int_single_value() {
        let mut rng = Mulberry32::new(11);
        for _ in 0..100 {
            assert_eq!(uniform_int(&mut rng, 9, 9), 9);
        }
    }

    #[test]
    fn test_uniform_id_range() {
        let mut rng = Mulberry32::new(5);
        for _ in 0..10_000 {
            let id = uniform_id(&mut rng, 7);
            assert!((1..=7).contains(&id));
        }
    }

    #[test]
    fn test_uniform_choice() {
        let mut rng = Mulberry32::new(8);
        let items = ["a", "b", "c"];

        for _ in 0..1000 {
            let pick = uniform_choice(&mut rng, &items[..]).unwrap();
            assert!(items.contains(pick));
        }
    }

    #[test]
    fn test_uniform_choice_empty_does_not_draw() {
        let mut rng = Mulberry32::new(8);
        let before = rng.clone();
        let empty: [u8; 0] = [];

        assert!(uniform_choice(&mut rng, &empty[..]).is_none());
        assert_eq!(rng, before);
    }

    #[test]
    fn test_skewed_or_uniform_id_in_bounds() {
        let mut rng = Mulberry32::new(21);
        for n in [1u64, 2, 10, 1000] {
            for _ in 0..2_000 {
                let id = skewed_or_uniform_id(&mut rng, n, 0.7, 1.25);
                assert!((1..=n).contains(&id), "id {id} outside 1..={n}");
            }
        }
    }

    #[test]
    fn test_skewed_or_uniform_id_always_uniform_at_zero_weight() {
        let mut a = Mulberry32::new(4);
        let mut b = Mulberry32::new(4);

        let id = skewed_or_uniform_id(&mut a, 50, 0.0, 1.25);
        unit(&mut b);
        assert_eq!(id, uniform_id(&mut b, 50));
    }
}
