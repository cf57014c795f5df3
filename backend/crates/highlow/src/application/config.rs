//! Application Configuration
//!
//! Configuration for the High-Low application layer.

use std::str::FromStr;
use std::time::Duration;

use crate::domain::value_objects::GuessResult;

/// Display language for every player-facing string and for the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Korean,
    English,
}

impl Locale {
    /// Shown before any session exists
    pub fn welcome(&self) -> &'static str {
        match self {
            Locale::Korean => "반가워요! 숫자를 맞춰보세요.",
            Locale::English => "Nice to meet you! Try to guess my number.",
        }
    }

    /// Shown when a session starts
    pub fn session_greeting(&self) -> &'static str {
        match self {
            Locale::Korean => "1부터 100 사이의 숫자를 생각했어요. 맞춰보세요!",
            Locale::English => "I'm thinking of a number between 1 and 100. Guess it!",
        }
    }

    /// How the prompt describes a result
    pub fn result_label(&self, result: GuessResult) -> &'static str {
        match (self, result) {
            (Locale::Korean, GuessResult::Up) => "더 높음(UP)",
            (Locale::Korean, GuessResult::Down) => "더 낮음(DOWN)",
            (Locale::Korean, GuessResult::Correct) => "정답(CORRECT)",
            (Locale::English, GuessResult::Up) => "higher (UP)",
            (Locale::English, GuessResult::Down) => "lower (DOWN)",
            (Locale::English, GuessResult::Correct) => "correct (CORRECT)",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" | "korean" => Ok(Locale::Korean),
            "en" | "en-us" | "english" => Ok(Locale::English),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// How strictly the startup probe judges the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMode {
    /// Any non-empty text passes
    #[default]
    NonEmpty,
    /// The text must contain the probe marker
    ContainsMarker,
}

impl FromStr for ProbeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "non-empty" | "nonempty" | "lenient" => Ok(ProbeMode::NonEmpty),
            "marker" | "strict" => Ok(ProbeMode::ContainsMarker),
            other => Err(format!("unsupported probe mode: {other}")),
        }
    }
}

/// Text used when commentary cannot be generated.
///
/// `miss` may contain `{result}`, replaced by `UP` or `DOWN`. The
/// `empty_*` texts cover a call that succeeded but produced no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    pub correct: String,
    pub miss: String,
    pub empty_correct: String,
    pub empty_miss: String,
}

impl FallbackPolicy {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Korean => Self {
                correct: "정답입니다! (AI 연결 오류)".to_string(),
                miss: "{result}! (AI 연결 오류)".to_string(),
                empty_correct: "정답입니다!".to_string(),
                empty_miss: "틀렸어요!".to_string(),
            },
            Locale::English => Self {
                correct: "Correct! (AI connection error)".to_string(),
                miss: "{result}! (AI connection error)".to_string(),
                empty_correct: "Correct!".to_string(),
                empty_miss: "Wrong!".to_string(),
            },
        }
    }

    pub fn on_generation_failure(&self, result: GuessResult) -> String {
        match result {
            GuessResult::Correct => self.correct.clone(),
            other => self.miss.replace("{result}", other.code()),
        }
    }

    pub fn on_empty_answer(&self, result: GuessResult) -> String {
        match result {
            GuessResult::Correct => self.empty_correct.clone(),
            _ => self.empty_miss.clone(),
        }
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// High-Low application configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub locale: Locale,
    /// Word the probe asks the service to repeat
    pub probe_marker: String,
    pub probe_mode: ProbeMode,
    /// Upper bound for the startup probe call
    pub probe_timeout: Duration,
    /// Upper bound for one commentary call; expiry takes the fallback path
    pub commentary_timeout: Duration,
    pub fallback: FallbackPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Korean,
            probe_marker: "READY".to_string(),
            probe_mode: ProbeMode::NonEmpty,
            probe_timeout: Duration::from_secs(15),
            commentary_timeout: Duration::from_secs(20),
            fallback: FallbackPolicy::for_locale(Locale::Korean),
        }
    }
}

impl GameConfig {
    /// Default settings in the given language
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            fallback: FallbackPolicy::for_locale(locale),
            ..Default::default()
        }
    }

    /// Instruction sent by the credential probe
    pub fn probe_instruction(&self) -> String {
        format!("Say \"{}\"", self.probe_marker)
    }
}
