//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod commentary;
pub mod config;
pub mod game_state;
pub mod reset_credential;
pub mod start_session;
pub mod submit_guess;
pub mod validate_credential;

// Re-exports
pub use commentary::{Commentary, CommentaryRequester};
pub use config::{FallbackPolicy, GameConfig, Locale, ProbeMode};
pub use game_state::{GameSnapshot, GetGameStateUseCase};
pub use reset_credential::ResetCredentialUseCase;
pub use start_session::StartSessionUseCase;
pub use submit_guess::{SubmitGuessOutput, SubmitGuessUseCase};
pub use validate_credential::ValidateCredentialUseCase;
