//! Validate Credential Use Case
//!
//! One-shot probe against the text generator. A passing probe stores
//! the credential and starts the first session in the same update.

use std::sync::Arc;

use platform::secret::ApiKey;

use crate::application::config::{GameConfig, ProbeMode};
use crate::application::game_state::GameSnapshot;
use crate::domain::repository::{GameStateRepository, TargetSource, TextGenerator};
use crate::error::{GameError, GameResult, GenerationFailure};

/// Validate Credential Use Case
pub struct ValidateCredentialUseCase<S, G, T>
where
    S: GameStateRepository,
    G: TextGenerator,
    T: TargetSource,
{
    state_repo: Arc<S>,
    generator: Arc<G>,
    targets: Arc<T>,
    config: Arc<GameConfig>,
}

impl<S, G, T> ValidateCredentialUseCase<S, G, T>
where
    S: GameStateRepository,
    G: TextGenerator,
    T: TargetSource,
{
    pub fn new(
        state_repo: Arc<S>,
        generator: Arc<G>,
        targets: Arc<T>,
        config: Arc<GameConfig>,
    ) -> Self {
        Self {
            state_repo,
            generator,
            targets,
            config,
        }
    }

    pub async fn execute(&self, raw_key: String) -> GameResult<GameSnapshot> {
        let api_key = ApiKey::new(raw_key)?;

        // Fail fast before spending a network call
        if self.state_repo.load().await?.is_credential_validated() {
            return Err(GameError::CredentialAlreadyValidated);
        }

        self.probe(&api_key).await?;

        let target = self.targets.draw();
        let greeting = self.config.locale.session_greeting();
        let config = self.config.clone();

        let snapshot = self
            .state_repo
            .update(move |state| {
                state.accept_credential(api_key)?;
                let session_id = state.start_session(target, greeting)?.id;
                tracing::info!(session_id = %session_id, "API key validated, session started");
                Ok(GameSnapshot::from_state(state, &config))
            })
            .await?;

        Ok(snapshot)
    }

    async fn probe(&self, api_key: &ApiKey) -> GameResult<()> {
        let instruction = self.config.probe_instruction();
        let outcome = match tokio::time::timeout(
            self.config.probe_timeout,
            self.generator.generate(api_key, &instruction),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(GenerationFailure::Timeout(self.config.probe_timeout)),
        };

        let text = match outcome {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                return Err(GameError::CredentialRejected(
                    "the service returned an empty answer".to_string(),
                ));
            }
            Err(GenerationFailure::Service(e)) if e.is_auth_failure() => {
                return Err(GameError::CredentialRejected(format!(
                    "the service refused the key ({e})"
                )));
            }
            Err(e) => return Err(GameError::CredentialRejected(e.to_string())),
        };

        if self.config.probe_mode == ProbeMode::ContainsMarker
            && !text.contains(&self.config.probe_marker)
        {
            return Err(GameError::CredentialRejected(format!(
                "the answer did not contain {:?}",
                self.config.probe_marker
            )));
        }

        Ok(())
    }
}
