//! Domain Services
//!
//! Pure game logic.

use std::cmp::Ordering;

use crate::domain::value_objects::{Guess, GuessResult, TargetNumber};

/// Compare a guess with the target.
///
/// A guess below the target yields `Up` (the secret is higher).
pub fn compare(guess: Guess, target: TargetNumber) -> GuessResult {
    match guess.value().cmp(&target.value()) {
        Ordering::Less => GuessResult::Up,
        Ordering::Greater => GuessResult::Down,
        Ordering::Equal => GuessResult::Correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{MAX_NUMBER, MIN_NUMBER};

    #[test]
    fn test_compare_exhaustive() {
        for t in MIN_NUMBER..=MAX_NUMBER {
            let target = TargetNumber::new(t).unwrap();
            for g in MIN_NUMBER..=MAX_NUMBER {
                let guess = Guess::new(i64::from(g)).unwrap();
                let expected = if g == t {
                    GuessResult::Correct
                } else if g < t {
                    GuessResult::Up
                } else {
                    GuessResult::Down
                };
                assert_eq!(compare(guess, target), expected, "guess={g} target={t}");
            }
        }
    }

    #[test]
    fn test_compare_examples() {
        let target = TargetNumber::new(42).unwrap();
        assert_eq!(compare(Guess::new(10).unwrap(), target), GuessResult::Up);
        assert_eq!(compare(Guess::new(70).unwrap(), target), GuessResult::Down);
        assert_eq!(compare(Guess::new(42).unwrap(), target), GuessResult::Correct);
    }
}
