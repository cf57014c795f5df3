//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::application::config::GameConfig;
use crate::application::{
    GetGameStateUseCase, ResetCredentialUseCase, StartSessionUseCase, SubmitGuessUseCase,
    ValidateCredentialUseCase,
};
use crate::domain::repository::{GameStateRepository, TargetSource, TextGenerator};
use crate::error::{GameError, GameResult};
use crate::presentation::dto::{CredentialRequest, GameStateResponse, GuessRequest, GuessResponse};

/// Shared state for game handlers
pub struct GameAppState<S, G, T>
where
    S: GameStateRepository + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
    T: TargetSource + 'static,
{
    pub repo: Arc<S>,
    pub generator: Arc<G>,
    pub targets: Arc<T>,
    pub config: Arc<GameConfig>,
}

impl<S, G, T> Clone for GameAppState<S, G, T>
where
    S: GameStateRepository + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
    T: TargetSource + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            generator: self.generator.clone(),
            targets: self.targets.clone(),
            config: self.config.clone(),
        }
    }
}

/// GET /api/game/state
pub async fn game_state<S, G, T>(
    State(state): State<GameAppState<S, G, T>>,
) -> GameResult<Json<GameStateResponse>>
where
    S: GameStateRepository + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
    T: TargetSource + 'static,
{
    let use_case = GetGameStateUseCase::new(state.repo.clone(), state.config.clone());
    let snapshot = use_case.execute().await?;
    Ok(Json(snapshot.into()))
}

/// POST /api/game/credential
pub async fn validate_credential<S, G, T>(
    State(state): State<GameAppState<S, G, T>>,
    Json(req): Json<CredentialRequest>,
) -> GameResult<Json<GameStateResponse>>
where
    S: GameStateRepository + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
    T: TargetSource + 'static,
{
    let use_case = ValidateCredentialUseCase::new(
        state.repo.clone(),
        state.generator.clone(),
        state.targets.clone(),
        state.config.clone(),
    );
    let snapshot = use_case.execute(req.api_key).await?;
    Ok(Json(snapshot.into()))
}

/// DELETE /api/game/credential
pub async fn reset_credential<S, G, T>(
    State(state): State<GameAppState<S, G, T>>,
) -> GameResult<Json<GameStateResponse>>
where
    S: GameStateRepository + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
    T: TargetSource + 'static,
{
    let use_case = ResetCredentialUseCase::new(state.repo.clone(), state.config.clone());
    let snapshot = use_case.execute().await?;
    Ok(Json(snapshot.into()))
}

/// POST /api/game/guess
pub async fn submit_guess<S, G, T>(
    State(state): State<GameAppState<S, G, T>>,
    Json(req): Json<GuessRequest>,
) -> GameResult<Json<GuessResponse>>
where
    S: GameStateRepository + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
    T: TargetSource + 'static,
{
    let use_case = SubmitGuessUseCase::new(
        state.repo.clone(),
        state.generator.clone(),
        state.config.clone(),
    );
    let raw = req.guess.into_text();

    // Run detached so a dropped connection cannot leave the session busy
    let output = tokio::spawn(async move { use_case.execute(&raw).await })
        .await
        .map_err(|e| GameError::Internal(format!("guess task failed: {e}")))??;

    Ok(Json(output.into()))
}

/// POST /api/game/restart
pub async fn restart<S, G, T>(
    State(state): State<GameAppState<S, G, T>>,
) -> GameResult<Json<GameStateResponse>>
where
    S: GameStateRepository + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
    T: TargetSource + 'static,
{
    let use_case =
        StartSessionUseCase::new(state.repo.clone(), state.targets.clone(), state.config.clone());
    let snapshot = use_case.restart().await?;
    Ok(Json(snapshot.into()))
}
