//! Domain Value Objects
//!
//! Immutable value types for the High-Low domain.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameError, GameResult};

/// Smallest number the game will pick or accept
pub const MIN_NUMBER: u8 = 1;
/// Largest number the game will pick or accept
pub const MAX_NUMBER: u8 = 100;

// ============================================================================
// Guess
// ============================================================================

/// A player's guess, guaranteed to lie in `MIN_NUMBER..=MAX_NUMBER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Guess(u8);

impl Guess {
    pub fn new(value: i64) -> GameResult<Self> {
        if (i64::from(MIN_NUMBER)..=i64::from(MAX_NUMBER)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(GameError::GuessOutOfRange(value))
        }
    }

    /// Parse raw form input. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> GameResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GameError::GuessNotANumber(String::new()));
        }
        let value: i64 = trimmed
            .parse()
            .map_err(|_| GameError::GuessNotANumber(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// TargetNumber
// ============================================================================

/// The secret number of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TargetNumber(u8);

impl TargetNumber {
    pub fn new(value: u8) -> Option<Self> {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for TargetNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// GuessResult
// ============================================================================

/// Outcome of comparing a guess with the target.
///
/// `Up` means the guess was too low and the secret is higher;
/// `Down` means the guess was too high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuessResult {
    Up,
    Down,
    Correct,
}

impl GuessResult {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Correct => "CORRECT",
        }
    }

    #[inline]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// GameStatus
// ============================================================================

/// Where the game stands.
///
/// - **Setup**: no validated credential yet, nothing to play
/// - **Playing**: a session is live and accepts guesses
/// - **Won**: the current session is over; only a new session leaves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    #[default]
    Setup,
    Playing,
    Won,
}

impl GameStatus {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Setup => "SETUP",
            Self::Playing => "PLAYING",
            Self::Won => "WON",
        }
    }

    #[inline]
    pub const fn accepts_guesses(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Terminal for the current session
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
