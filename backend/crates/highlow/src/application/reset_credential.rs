//! Reset Credential Use Case
//!
//! "Change API key": drops the credential and the whole session and
//! returns to SETUP.

use std::sync::Arc;

use crate::application::config::GameConfig;
use crate::application::game_state::GameSnapshot;
use crate::domain::repository::GameStateRepository;
use crate::error::GameResult;

pub struct ResetCredentialUseCase<S>
where
    S: GameStateRepository,
{
    state_repo: Arc<S>,
    config: Arc<GameConfig>,
}

impl<S> ResetCredentialUseCase<S>
where
    S: GameStateRepository,
{
    pub fn new(state_repo: Arc<S>, config: Arc<GameConfig>) -> Self {
        Self { state_repo, config }
    }

    pub async fn execute(&self) -> GameResult<GameSnapshot> {
        let config = self.config.clone();
        self.state_repo
            .update(move |state| {
                if state.reset_credential() {
                    tracing::info!("API key and session discarded");
                }
                Ok(GameSnapshot::from_state(state, &config))
            })
            .await
    }
}
