//! Start Session Use Case

use std::sync::Arc;

use crate::application::config::GameConfig;
use crate::application::game_state::GameSnapshot;
use crate::domain::repository::{GameStateRepository, TargetSource};
use crate::domain::value_objects::GameStatus;
use crate::error::{GameError, GameResult};

/// Start Session Use Case
pub struct StartSessionUseCase<S, T>
where
    S: GameStateRepository,
    T: TargetSource,
{
    state_repo: Arc<S>,
    targets: Arc<T>,
    config: Arc<GameConfig>,
}

impl<S, T> StartSessionUseCase<S, T>
where
    S: GameStateRepository,
    T: TargetSource,
{
    pub fn new(state_repo: Arc<S>, targets: Arc<T>, config: Arc<GameConfig>) -> Self {
        Self {
            state_repo,
            targets,
            config,
        }
    }

    /// Draw a new target and replace the current session, whatever its status
    pub async fn execute(&self) -> GameResult<GameSnapshot> {
        self.start(false).await
    }

    /// "Play again": only offered once the current session is won
    pub async fn restart(&self) -> GameResult<GameSnapshot> {
        self.start(true).await
    }

    async fn start(&self, require_won: bool) -> GameResult<GameSnapshot> {
        let target = self.targets.draw();
        let greeting = self.config.locale.session_greeting();
        let config = self.config.clone();

        self.state_repo
            .update(move |state| {
                let status = state.status();
                if require_won && status != GameStatus::Won {
                    return Err(GameError::RestartUnavailable(status));
                }
                let discarded = state.session.as_ref().map_or(0, |s| s.logs.len());
                let session_id = state.start_session(target, greeting)?.id;
                tracing::info!(
                    session_id = %session_id,
                    previous_status = %status,
                    discarded_guesses = discarded,
                    "Session started"
                );
                Ok(GameSnapshot::from_state(state, &config))
            })
            .await
    }
}
