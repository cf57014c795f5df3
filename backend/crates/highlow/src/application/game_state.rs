//! Game State Query Use Case

use std::sync::Arc;

use crate::application::config::GameConfig;
use crate::domain::entities::{GameState, GuessRecord};
use crate::domain::repository::GameStateRepository;
use crate::domain::value_objects::{GameStatus, TargetNumber};
use crate::error::GameResult;

/// What the player is allowed to see of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub credential_validated: bool,
    pub busy: bool,
    pub latest_message: String,
    /// Newest first
    pub logs: Vec<GuessRecord>,
    /// Present only once the game is won
    pub revealed_target: Option<TargetNumber>,
}

impl GameSnapshot {
    pub fn from_state(state: &GameState, config: &GameConfig) -> Self {
        match &state.session {
            Some(session) => Self {
                status: session.status,
                credential_validated: state.is_credential_validated(),
                busy: session.busy,
                latest_message: session.latest_message.clone(),
                logs: session.logs.clone(),
                revealed_target: session.revealed_target(),
            },
            None => Self {
                status: GameStatus::Setup,
                credential_validated: state.is_credential_validated(),
                busy: false,
                latest_message: config.locale.welcome().to_string(),
                logs: Vec::new(),
                revealed_target: None,
            },
        }
    }
}

/// Get Game State Use Case
pub struct GetGameStateUseCase<S>
where
    S: GameStateRepository,
{
    state_repo: Arc<S>,
    config: Arc<GameConfig>,
}

impl<S> GetGameStateUseCase<S>
where
    S: GameStateRepository,
{
    pub fn new(state_repo: Arc<S>, config: Arc<GameConfig>) -> Self {
        Self { state_repo, config }
    }

    pub async fn execute(&self) -> GameResult<GameSnapshot> {
        let state = self.state_repo.load().await?;
        Ok(GameSnapshot::from_state(&state, &self.config))
    }
}
