//! High-Low guessing game backend module
//!
//! Clean Architecture structure:
//! - `domain/` - Game state machine, value objects, port traits
//! - `application/` - Use cases and commentary requester
//! - `infra/` - In-memory state, Gemini generator, target draw
//! - `presentation/` - HTTP handlers
//!
//! ## Game Model
//! - A session only exists once an API key has passed the startup probe
//! - At most one guess is in flight at a time; the others are rejected
//! - Every accepted guess is recorded, with fallback text when the LLM fails
//! - Completions belonging to a replaced session are dropped

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{GameConfig, Locale, ProbeMode};
pub use error::{GameError, GameResult};
pub use infra::gemini::GeminiTextGenerator;
pub use infra::memory::InMemoryGameRepository;
pub use presentation::router::{game_router, game_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
