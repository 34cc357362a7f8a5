//! Systems - the automaton passes run by the engine each frame
//!
//! - life:    one generation of the B3/S23 rule on a torus
//! - seeding: pointer brush that sprinkles live cells

pub mod life;
pub mod seeding;

pub use life::{advance_generation, count_neighbors, next_state};
pub use seeding::seed_brush;

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Bernoulli draw with the given probability
#[inline]
pub fn chance(state: &mut u32, probability: f64) -> bool {
    (xorshift32(state) as f64) / (u32::MAX as f64) < probability
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorshift_never_reaches_zero_from_non_zero_state() {
        let mut state = 12345u32;
        for _ in 0..10_000 {
            assert_ne!(xorshift32(&mut state), 0);
        }
    }

    #[test]
    fn chance_respects_extremes() {
        let mut state = 7u32;
        for _ in 0..1000 {
            assert!(!chance(&mut state, 0.0));
            assert!(chance(&mut state, 1.01));
        }
    }

    #[test]
    fn chance_is_roughly_calibrated() {
        let mut state = 12345u32;
        let hits = (0..10_000).filter(|_| chance(&mut state, 0.3)).count();
        assert!((2500..3500).contains(&hits), "hits = {}", hits);
    }
}
