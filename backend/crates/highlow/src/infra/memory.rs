//! In-Memory Repository Implementation
//!
//! The game lives only in process memory; restarting the process
//! forgets the credential and every session.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::GameState;
use crate::domain::repository::GameStateRepository;
use crate::error::GameResult;

/// Mutex-guarded game state shared by every handler
#[derive(Clone, Default)]
pub struct InMemoryGameRepository {
    state: Arc<Mutex<GameState>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStateRepository for InMemoryGameRepository {
    async fn load(&self) -> GameResult<GameState> {
        Ok(self.state.lock().await.clone())
    }

    async fn update<F, T>(&self, f: F) -> GameResult<T>
    where
        F: FnOnce(&mut GameState) -> GameResult<T> + Send,
        T: Send,
    {
        let mut guard = self.state.lock().await;
        f(&mut guard)
    }
}
