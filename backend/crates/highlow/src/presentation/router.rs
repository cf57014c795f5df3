//! High-Low Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::GameConfig;
use crate::domain::repository::{GameStateRepository, TargetSource, TextGenerator};
use crate::infra::gemini::GeminiTextGenerator;
use crate::infra::memory::InMemoryGameRepository;
use crate::infra::random::ThreadRngTargets;
use crate::presentation::handlers::{self, GameAppState};

/// Create the game router backed by Gemini and in-memory state
pub fn game_router(generator: GeminiTextGenerator, config: GameConfig) -> Router {
    game_router_generic(
        InMemoryGameRepository::new(),
        generator,
        ThreadRngTargets,
        config,
    )
}

/// Create a game router for any repository, generator and target source
pub fn game_router_generic<S, G, T>(repo: S, generator: G, targets: T, config: GameConfig) -> Router
where
    S: GameStateRepository + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
    T: TargetSource + 'static,
{
    let state = GameAppState {
        repo: Arc::new(repo),
        generator: Arc::new(generator),
        targets: Arc::new(targets),
        config: Arc::new(config),
    };

    Router::new()
        .route("/state", get(handlers::game_state::<S, G, T>))
        .route(
            "/credential",
            post(handlers::validate_credential::<S, G, T>)
                .delete(handlers::reset_credential::<S, G, T>),
        )
        .route("/guess", post(handlers::submit_guess::<S, G, T>))
        .route("/restart", post(handlers::restart::<S, G, T>))
        .with_state(state)
}
