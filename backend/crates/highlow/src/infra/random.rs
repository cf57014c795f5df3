//! Target number sources

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::repository::TargetSource;
use crate::domain::value_objects::{MAX_NUMBER, MIN_NUMBER, TargetNumber};

fn draw_from<R: Rng + ?Sized>(rng: &mut R) -> TargetNumber {
    let value = rng.random_range(MIN_NUMBER..=MAX_NUMBER);
    TargetNumber::new(value).unwrap_or_else(|| unreachable!("{value} drawn outside range"))
}

/// Thread-local RNG; used by the server
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngTargets;

impl TargetSource for ThreadRngTargets {
    fn draw(&self) -> TargetNumber {
        draw_from(&mut rand::rng())
    }
}

/// Reproducible sequence of targets for tests and demos
#[derive(Debug)]
pub struct SeededTargets {
    rng: Mutex<StdRng>,
}

impl SeededTargets {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TargetSource for SeededTargets {
    fn draw(&self) -> TargetNumber {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        draw_from(&mut *rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_targets_repeat() {
        let a = SeededTargets::new(7);
        let b = SeededTargets::new(7);
        let first: Vec<u8> = (0..20).map(|_| a.draw().value()).collect();
        let second: Vec<u8> = (0..20).map(|_| b.draw().value()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_draws_stay_in_range() {
        let source = ThreadRngTargets;
        for _ in 0..1_000 {
            let n = source.draw().value();
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(&n));
        }
    }

    #[test]
    fn test_draws_cover_both_ends() {
        let source = SeededTargets::new(1);
        let draws: Vec<u8> = (0..5_000).map(|_| source.draw().value()).collect();
        assert!(draws.contains(&MIN_NUMBER));
        assert!(draws.contains(&MAX_NUMBER));
    }
}
