//! High-Low Error Types
//!
//! Game-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::gemini::GenerationError;
use platform::secret::CredentialPolicyError;
use thiserror::Error;

use crate::domain::value_objects::GameStatus;

/// Game-specific result type alias
pub type GameResult<T> = Result<T, GameError>;

/// Game-specific error variants
///
/// Every variant leaves the game in an interactive, retryable state.
#[derive(Debug, Error)]
pub enum GameError {
    /// Guess input is not an integer
    #[error("Guess must be a whole number (got {0:?})")]
    GuessNotANumber(String),

    /// Guess is outside the playable range
    #[error("Guess must be between 1 and 100 (got {0})")]
    GuessOutOfRange(i64),

    /// Credential input failed local validation
    #[error("Invalid API key: {0}")]
    InvalidCredential(#[from] CredentialPolicyError),

    /// Probe call failed or returned an unusable answer
    #[error("API key was rejected: {0}")]
    CredentialRejected(String),

    /// Operation needs a validated credential
    #[error("No validated API key")]
    CredentialRequired,

    /// A credential is already in use
    #[error("An API key is already validated")]
    CredentialAlreadyValidated,

    /// Guessing is only valid while PLAYING
    #[error("Cannot guess while the game is {0}")]
    NotPlaying(GameStatus),

    /// A guess is still waiting for commentary
    #[error("A guess is already being judged")]
    GuessInFlight,

    /// The session was replaced while its guess was being judged
    #[error("The game was restarted before this guess was judged")]
    SessionReplaced,

    /// Restart is only offered once the game is won
    #[error("Cannot restart while the game is {0}")]
    RestartUnavailable(GameStatus),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GameError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::GuessNotANumber(_)
            | GameError::GuessOutOfRange(_)
            | GameError::InvalidCredential(_) => ErrorKind::BadRequest,
            GameError::CredentialRejected(_) | GameError::CredentialRequired => {
                ErrorKind::Unauthorized
            }
            GameError::CredentialAlreadyValidated
            | GameError::NotPlaying(_)
            | GameError::GuessInFlight
            | GameError::SessionReplaced
            | GameError::RestartUnavailable(_) => ErrorKind::Conflict,
            GameError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// What the player can do about it
    fn action(&self) -> Option<&'static str> {
        match self {
            GameError::GuessNotANumber(_) | GameError::GuessOutOfRange(_) => {
                Some("Enter a whole number from 1 to 100")
            }
            GameError::InvalidCredential(_) | GameError::CredentialRejected(_) => {
                Some("Check the API key and try again")
            }
            GameError::CredentialRequired => Some("Submit an API key first"),
            GameError::CredentialAlreadyValidated => Some("Change the API key to use another one"),
            GameError::GuessInFlight => Some("Wait for the current guess to be judged"),
            GameError::RestartUnavailable(_) => Some("Finish the current game first"),
            GameError::NotPlaying(_) | GameError::SessionReplaced | GameError::Internal(_) => None,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GameError::Internal(msg) => {
                tracing::error!(message = %msg, "High-Low internal error");
            }
            GameError::CredentialRejected(reason) => {
                tracing::warn!(reason = %reason, "API key rejected by probe");
            }
            _ => {
                tracing::debug!(error = %self, "Request rejected");
            }
        }
    }
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        let kind = err.kind();
        let action = err.action();
        let app_error = AppError::new(kind, err.to_string());
        match action {
            Some(action) => app_error.with_action(action),
            None => app_error,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

/// Why a text-generation call produced nothing usable.
///
/// Never surfaced to the player during a guess; it only selects the
/// fallback path and is logged.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error(transparent)]
    Service(#[from] GenerationError),

    #[error("Text generation timed out after {0:?}")]
    Timeout(Duration),
}
