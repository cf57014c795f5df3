//! Repository and Port Traits
//!
//! Interfaces to state storage and to the outside world. Implementations
//! live in the infrastructure layer.

use platform::secret::ApiKey;

use crate::domain::entities::GameState;
use crate::domain::value_objects::TargetNumber;
use crate::error::{GameResult, GenerationFailure};

/// Game state storage
#[trait_variant::make(GameStateRepository: Send)]
pub trait LocalGameStateRepository {
    /// Snapshot of the current state
    async fn load(&self) -> GameResult<GameState>;

    /// Run `f` against the state atomically; no other update interleaves
    async fn update<F, T>(&self, f: F) -> GameResult<T>
    where
        F: FnOnce(&mut GameState) -> GameResult<T> + Send,
        T: Send;
}

/// External text-generation collaborator
#[trait_variant::make(TextGenerator: Send)]
pub trait LocalTextGenerator {
    /// Send one stateless instruction. `Ok(None)` means an answer with no text.
    async fn generate(
        &self,
        api_key: &ApiKey,
        instruction: &str,
    ) -> Result<Option<String>, GenerationFailure>;
}

/// Source of secret numbers
pub trait TargetSource: Send + Sync {
    /// Draw uniformly from `MIN_NUMBER..=MAX_NUMBER`
    fn draw(&self) -> TargetNumber;
}
