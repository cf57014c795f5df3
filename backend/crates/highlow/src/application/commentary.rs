//! Commentary Requester
//!
//! Turns a guess outcome into one stateless instruction for the text
//! generator and reduces whatever comes back to a display string.
//! Generator failures never escape this module.

use std::sync::Arc;

use platform::secret::ApiKey;

use crate::application::config::{GameConfig, Locale};
use crate::domain::repository::TextGenerator;
use crate::domain::value_objects::{Guess, GuessResult, TargetNumber};
use crate::error::GenerationFailure;

/// Final commentary for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commentary {
    pub text: String,
    /// True when `text` came from the fallback policy
    pub fallback: bool,
}

/// Build the commentary instruction for one guess.
pub fn build_prompt(
    locale: Locale,
    target: TargetNumber,
    guess: Guess,
    result: GuessResult,
) -> String {
    let label = locale.result_label(result);
    match locale {
        Locale::Korean => format!(
            "숫자 맞추기 게임 중입니다. 정답은 {target}이고, 사용자는 {guess}를 입력했습니다.\n\
             결과는 {label} 입니다.\n\
             사용자에게 짧고 재미있는 도발이나 응원의 한마디를 한국어로 해주세요.\n\
             만약 정답을 맞췄다면 아주 거창하게 축하해주세요."
        ),
        Locale::English => format!(
            "We are playing a number guessing game. \
             The answer is {target} and the player guessed {guess}.\n\
             The result is {label}.\n\
             Give the player one short, playful taunt or word of encouragement in English.\n\
             If they guessed correctly, celebrate it extravagantly."
        ),
    }
}

pub struct CommentaryRequester<G>
where
    G: TextGenerator,
{
    generator: Arc<G>,
    config: Arc<GameConfig>,
}

impl<G> CommentaryRequester<G>
where
    G: TextGenerator,
{
    pub fn new(generator: Arc<G>, config: Arc<GameConfig>) -> Self {
        Self { generator, config }
    }

    /// Ask for commentary exactly once. Always yields non-empty text.
    pub async fn request(
        &self,
        api_key: &ApiKey,
        target: TargetNumber,
        guess: Guess,
        result: GuessResult,
    ) -> Commentary {
        let prompt = build_prompt(self.config.locale, target, guess, result);

        let outcome = match tokio::time::timeout(
            self.config.commentary_timeout,
            self.generator.generate(api_key, &prompt),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(GenerationFailure::Timeout(self.config.commentary_timeout)),
        };

        match outcome {
            Ok(Some(text)) if !text.trim().is_empty() => Commentary {
                text: text.trim().to_string(),
                fallback: false,
            },
            Ok(_) => {
                tracing::warn!(guess = %guess, result = %result, "Commentary came back empty");
                self.fallback(self.config.fallback.on_empty_answer(result))
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    guess = %guess,
                    result = %result,
                    "Commentary generation failed, using fallback"
                );
                self.fallback(self.config.fallback.on_generation_failure(result))
            }
        }
    }

    fn fallback(&self, text: String) -> Commentary {
        Commentary {
            text,
            fallback: true,
        }
    }
}
