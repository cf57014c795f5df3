//! API DTOs (Data Transfer Objects)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::application::game_state::GameSnapshot;
use crate::application::submit_guess::SubmitGuessOutput;
use crate::domain::entities::GuessRecord;
use crate::domain::value_objects::{GameStatus, GuessResult};

// ============================================================================
// Credential
// ============================================================================

/// Request for POST /api/game/credential
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequest {
    pub api_key: String,
}

impl fmt::Debug for CredentialRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRequest")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Guess
// ============================================================================

/// Raw guess as typed; number inputs may arrive as JSON numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawGuess {
    Text(String),
    Number(serde_json::Number),
}

impl RawGuess {
    pub fn into_text(self) -> String {
        match self {
            RawGuess::Text(text) => text,
            RawGuess::Number(number) => number.to_string(),
        }
    }
}

/// Request for POST /api/game/guess
#[derive(Debug, Clone, Deserialize)]
pub struct GuessRequest {
    pub guess: RawGuess,
}

/// Response for POST /api/game/guess
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub guess: u8,
    pub result: GuessResult,
    pub comment: String,
    pub created_at_ms: i64,
    pub status: GameStatus,
    pub fallback: bool,
}

impl From<SubmitGuessOutput> for GuessResponse {
    fn from(output: SubmitGuessOutput) -> Self {
        Self {
            guess: output.record.guess.value(),
            result: output.record.result,
            comment: output.record.comment,
            created_at_ms: output.record.created_at_ms,
            status: output.status,
            fallback: output.fallback,
        }
    }
}

// ============================================================================
// State
// ============================================================================

/// One entry of the guess history
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessLogDto {
    pub guess: u8,
    pub result: GuessResult,
    pub comment: String,
    pub created_at_ms: i64,
}

impl From<GuessRecord> for GuessLogDto {
    fn from(record: GuessRecord) -> Self {
        Self {
            guess: record.guess.value(),
            result: record.result,
            comment: record.comment,
            created_at_ms: record.created_at_ms,
        }
    }
}

/// Response for GET /api/game/state and every state-changing call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub status: GameStatus,
    pub credential_validated: bool,
    pub busy: bool,
    pub latest_message: String,
    /// Newest first
    pub logs: Vec<GuessLogDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u8>,
}

impl From<GameSnapshot> for GameStateResponse {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            status: snapshot.status,
            credential_validated: snapshot.credential_validated,
            busy: snapshot.busy,
            latest_message: snapshot.latest_message,
            logs: snapshot.logs.into_iter().map(GuessLogDto::from).collect(),
            target: snapshot.revealed_target.map(|t| t.value()),
        }
    }
}
