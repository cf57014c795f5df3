//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (GameState, GameSession, GuessRecord)
//! - Domain value objects (Guess, TargetNumber, GuessResult, GameStatus)
//! - Domain services (guess comparison)
//! - Repository and port traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
