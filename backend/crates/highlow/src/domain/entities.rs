//! Domain Entities
//!
//! The game aggregate and the records it owns. All state transitions
//! happen through methods on [`GameState`].

use chrono::Utc;
use kernel::id::GameSessionId;
use platform::secret::ApiKey;

use crate::domain::services::compare;
use crate::domain::value_objects::{GameStatus, Guess, GuessResult, TargetNumber};
use crate::error::{GameError, GameResult};

/// One accepted guess. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Guess,
    pub result: GuessResult,
    pub comment: String,
    /// Strictly increasing within a session; doubles as the display key
    pub created_at_ms: i64,
}

/// A credential that passed the probe
#[derive(Debug, Clone)]
pub struct Credential {
    pub api_key: ApiKey,
}

/// One play-through, from target selection to WON or abandonment
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: GameSessionId,
    pub status: GameStatus,
    target: TargetNumber,
    /// Newest first
    pub logs: Vec<GuessRecord>,
    pub latest_message: String,
    pub busy: bool,
}

impl GameSession {
    pub fn new(target: TargetNumber, greeting: impl Into<String>) -> Self {
        Self {
            id: GameSessionId::new(),
            status: GameStatus::Playing,
            target,
            logs: Vec::new(),
            latest_message: greeting.into(),
            busy: false,
        }
    }

    /// The target, only once it has been found
    pub fn revealed_target(&self) -> Option<TargetNumber> {
        self.status.is_terminal().then_some(self.target)
    }

    fn next_timestamp(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.logs.first() {
            Some(latest) if latest.created_at_ms >= now => latest.created_at_ms + 1,
            _ => now,
        }
    }
}

/// Everything needed to finish a guess once commentary is back.
///
/// `session_id` acts as the request token: completing against a
/// different (newer) session is a no-op.
#[derive(Debug, Clone)]
pub struct PendingGuess {
    pub session_id: GameSessionId,
    pub guess: Guess,
    pub target: TargetNumber,
    pub result: GuessResult,
    pub api_key: ApiKey,
}

/// The whole game as seen by one player
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub credential: Option<Credential>,
    pub session: Option<GameSession>,
}

impl GameState {
    /// SETUP until a session exists, then the session's own status
    pub fn status(&self) -> GameStatus {
        self.session
            .as_ref()
            .map(|session| session.status)
            .unwrap_or(GameStatus::Setup)
    }

    pub fn is_credential_validated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.busy)
    }

    /// Record a credential that passed the probe. Only valid in SETUP.
    pub fn accept_credential(&mut self, api_key: ApiKey) -> GameResult<()> {
        if self.credential.is_some() {
            return Err(GameError::CredentialAlreadyValidated);
        }
        self.credential = Some(Credential { api_key });
        Ok(())
    }

    /// Replace any existing session with a fresh one.
    ///
    /// Prior logs are discarded. An in-flight guess from the old session
    /// will be ignored when it completes.
    pub fn start_session(
        &mut self,
        target: TargetNumber,
        greeting: impl Into<String>,
    ) -> GameResult<&GameSession> {
        if self.credential.is_none() {
            return Err(GameError::CredentialRequired);
        }
        Ok(&*self.session.insert(GameSession::new(target, greeting)))
    }

    /// Gate and mark a guess as in flight.
    pub fn begin_guess(&mut self, guess: Guess) -> GameResult<PendingGuess> {
        let api_key = match &self.credential {
            Some(credential) => credential.api_key.clone(),
            None => return Err(GameError::CredentialRequired),
        };
        let status = self.status();
        let session = match self.session.as_mut() {
            Some(session) if status.accepts_guesses() => session,
            _ => return Err(GameError::NotPlaying(status)),
        };
        if session.busy {
            return Err(GameError::GuessInFlight);
        }

        session.busy = true;
        Ok(PendingGuess {
            session_id: session.id,
            guess,
            target: session.target,
            result: compare(guess, session.target),
            api_key,
        })
    }

    /// Apply the commentary for a pending guess.
    ///
    /// Order: message, log record, busy flag, status. Returns `None`
    /// when the session the guess belonged to is gone.
    pub fn complete_guess(
        &mut self,
        pending: &PendingGuess,
        comment: String,
    ) -> Option<GuessRecord> {
        let session = self
            .session
            .as_mut()
            .filter(|session| session.id == pending.session_id && session.busy)?;

        let record = GuessRecord {
            guess: pending.guess,
            result: pending.result,
            comment: comment.clone(),
            created_at_ms: session.next_timestamp(),
        };

        session.latest_message = comment;
        session.logs.insert(0, record.clone());
        session.busy = false;
        if pending.result.is_correct() {
            session.status = GameStatus::Won;
        }

        Some(record)
    }

    /// Forget the credential and the session; back to SETUP.
    pub fn reset_credential(&mut self) -> bool {
        let had_anything = self.credential.is_some() || self.session.is_some();
        self.credential = None;
        self.session = None;
        had_anything
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(n: u8) -> TargetNumber {
        TargetNumber::new(n).unwrap()
    }

    fn guess(n: i64) -> Guess {
        Guess::new(n).unwrap()
    }

    fn playing_state(t: u8) -> GameState {
        let mut state = GameState::default();
        state.accept_credential(ApiKey::new("k").unwrap()).unwrap();
        state.start_session(target(t), "hello").unwrap();
        state
    }

    #[test]
    fn test_initial_state_is_setup() {
        let state = GameState::default();
        assert_eq!(state.status(), GameStatus::Setup);
        assert!(!state.is_credential_validated());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_start_session_requires_credential() {
        let mut state = GameState::default();
        assert!(matches!(
            state.start_session(target(5), "hi"),
            Err(GameError::CredentialRequired)
        ));
        assert_eq!(state.status(), GameStatus::Setup);
    }

    #[test]
    fn test_accept_credential_only_once() {
        let mut state = GameState::default();
        state.accept_credential(ApiKey::new("a").unwrap()).unwrap();
        assert!(matches!(
            state.accept_credential(ApiKey::new("b").unwrap()),
            Err(GameError::CredentialAlreadyValidated)
        ));
    }

    #[test]
    fn test_guess_in_setup_is_rejected() {
        let mut state = GameState::default();
        assert!(matches!(
            state.begin_guess(guess(3)),
            Err(GameError::CredentialRequired)
        ));
    }

    #[test]
    fn test_busy_gate() {
        let mut state = playing_state(50);
        let pending = state.begin_guess(guess(10)).unwrap();
        assert!(state.is_busy());
        assert!(matches!(
            state.begin_guess(guess(20)),
            Err(GameError::GuessInFlight)
        ));

        state.complete_guess(&pending, "nope".into()).unwrap();
        assert!(!state.is_busy());
        assert!(state.begin_guess(guess(20)).is_ok());
    }

    #[test]
    fn test_complete_prepends_and_wins() {
        let mut state = playing_state(42);
        let steps = [
            (10, GuessResult::Up),
            (70, GuessResult::Down),
            (42, GuessResult::Correct),
        ];
        for (g, expected) in steps {
            let pending = state.begin_guess(guess(g)).unwrap();
            assert_eq!(pending.result, expected);
            state.complete_guess(&pending, format!("c{g}")).unwrap();
        }

        let session = state.session.as_ref().unwrap();
        assert_eq!(session.status, GameStatus::Won);
        assert_eq!(session.logs.len(), 3);
        assert_eq!(session.logs[0].result, GuessResult::Correct);
        assert_eq!(session.logs[1].result, GuessResult::Down);
        assert_eq!(session.logs[2].result, GuessResult::Up);
        assert_eq!(session.latest_message, "c42");
        assert!(session.logs[0].created_at_ms > session.logs[1].created_at_ms);
        assert!(session.logs[1].created_at_ms > session.logs[2].created_at_ms);
        assert_eq!(session.revealed_target(), Some(target(42)));
    }

    #[test]
    fn test_no_guess_after_win() {
        let mut state = playing_state(7);
        let pending = state.begin_guess(guess(7)).unwrap();
        state.complete_guess(&pending, "yay".into()).unwrap();
        assert!(matches!(
            state.begin_guess(guess(7)),
            Err(GameError::NotPlaying(GameStatus::Won))
        ));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = playing_state(30);
        let pending = state.begin_guess(guess(10)).unwrap();

        state.start_session(target(60), "fresh").unwrap();
        assert!(state.complete_guess(&pending, "late".into()).is_none());

        let session = state.session.as_ref().unwrap();
        assert!(session.logs.is_empty());
        assert_eq!(session.latest_message, "fresh");
        assert!(!session.busy);
    }

    #[test]
    fn test_target_hidden_until_won() {
        let state = playing_state(12);
        assert!(state.session.as_ref().unwrap().revealed_target().is_none());
    }

    #[test]
    fn test_reset_credential() {
        let mut state = playing_state(12);
        assert!(state.reset_credential());
        assert_eq!(state.status(), GameStatus::Setup);
        assert!(!state.is_credential_validated());
        assert!(!state.reset_credential());
    }
}
