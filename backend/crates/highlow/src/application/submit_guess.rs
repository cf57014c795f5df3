//! Submit Guess Use Case

use std::sync::Arc;

use crate::application::commentary::CommentaryRequester;
use crate::application::config::GameConfig;
use crate::domain::entities::GuessRecord;
use crate::domain::repository::{GameStateRepository, TextGenerator};
use crate::domain::value_objects::{GameStatus, Guess};
use crate::error::{GameError, GameResult};

/// Output DTO for submit guess
#[derive(Debug, Clone)]
pub struct SubmitGuessOutput {
    pub record: GuessRecord,
    /// Status after the guess was applied
    pub status: GameStatus,
    /// True when the comment is fallback text
    pub fallback: bool,
}

/// Submit Guess Use Case
pub struct SubmitGuessUseCase<S, G>
where
    S: GameStateRepository,
    G: TextGenerator,
{
    state_repo: Arc<S>,
    commentary: CommentaryRequester<G>,
}

impl<S, G> SubmitGuessUseCase<S, G>
where
    S: GameStateRepository,
    G: TextGenerator,
{
    pub fn new(state_repo: Arc<S>, generator: Arc<G>, config: Arc<GameConfig>) -> Self {
        Self {
            state_repo,
            commentary: CommentaryRequester::new(generator, config),
        }
    }

    /// Parse, judge and record one guess.
    ///
    /// Rejections (bad input, wrong state, busy) leave the state untouched.
    /// Once accepted, the guess is always recorded, with fallback text if
    /// the generator fails.
    pub async fn execute(&self, raw: &str) -> GameResult<SubmitGuessOutput> {
        let guess = Guess::parse(raw)?;

        let pending = self
            .state_repo
            .update(move |state| state.begin_guess(guess))
            .await?;

        tracing::info!(
            session_id = %pending.session_id,
            guess = %pending.guess,
            result = %pending.result,
            "Guess accepted"
        );

        let commentary = self
            .commentary
            .request(&pending.api_key, pending.target, pending.guess, pending.result)
            .await;

        let pending_ref = &pending;
        let comment = commentary.text;
        let applied = self
            .state_repo
            .update(move |state| {
                Ok(state
                    .complete_guess(pending_ref, comment)
                    .map(|record| (record, state.status())))
            })
            .await?;

        let Some((record, status)) = applied else {
            tracing::warn!(
                session_id = %pending.session_id,
                guess = %pending.guess,
                "Session replaced while guess was in flight, dropping result"
            );
            return Err(GameError::SessionReplaced);
        };

        if status == GameStatus::Won {
            tracing::info!(
                session_id = %pending.session_id,
                target = %pending.target,
                "Target found, session won"
            );
        }

        Ok(SubmitGuessOutput {
            record,
            status,
            fallback: commentary.fallback,
        })
    }
}
