//! Attempt-loop state machine.
//!
//! `Game` holds the secret, the attempt counter, and an explicit `Phase`;
//! a single transition function (`submit`, or `guess` once parsed) resolves
//! one player input and reports what happened as a `Reply`. Keeping the
//! transitions in one place makes the win/loss boundaries testable without
//! any console I/O: callers feed strings in and match on the reply.
//!
//! Invariant: `0 <= attempts <= max_attempts` at all times. Only a valid,
//! in-range guess consumes an attempt; every rejected input leaves the
//! counter untouched.

use thiserror::Error;

use crate::model::GameConfig;

/// Error type for game construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The chosen secret does not lie within the configured guess bounds.
    #[error("secret {secret} is outside the configured range {min}..={max}")]
    SecretOutOfRange { secret: i64, min: i64, max: i64 },
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why a submitted line was rejected without consuming an attempt.
///
/// All of these are recoverable: the player is simply prompted again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The line was empty (or whitespace only).
    #[error("Empty input; enter an integer.")]
    Empty,

    /// The line did not parse as a decimal integer.
    #[error("Not an integer: {0:?}. Enter a number.")]
    NotAnInteger(String),

    /// The line parsed, but the value lies outside the guess bounds.
    #[error("Out of range; guesses run from {min} to {max}.")]
    OutOfRange { min: i64, max: i64 },

    /// The game already reached a terminal phase; nothing more to guess.
    #[error("The game is already over.")]
    Finished,
}

/// Directional feedback for a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
}

/// Result of resolving one submitted input against the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Input rejected; no attempt consumed, prompt again.
    Rejected(Rejection),

    /// Valid guess, wrong value, budget not yet exhausted; game continues.
    Missed { hint: Hint, attempts: u32 },

    /// The guess matched the secret. `attempts` includes the winning guess.
    Won { attempts: u32 },

    /// The budget is spent without a match; reveals the secret.
    Lost { hint: Hint, secret: i64 },
}

/// Loop phase. The session driver only ever observes `AwaitingInput` games;
/// the terminal phases exist so a stray post-game submit cannot corrupt the
/// counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingInput,
    Won,
    Lost,
}

/// One game: a secret, an attempt counter, and the configured bounds/budget.
///
/// The secret is immutable once chosen and owned by the game; it is revealed
/// only through a `Reply::Lost`.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    secret: i64,
    attempts: u32,
    phase: Phase,
}

impl Game {
    /// Create a game around `secret`. Fails if the secret is not within the
    /// configured guess bounds (a guess could then never match it).
    pub fn new(secret: i64, config: GameConfig) -> EngineResult<Self> {
        if !config.contains(secret) {
            return Err(EngineError::SecretOutOfRange {
                secret,
                min: config.min,
                max: config.max,
            });
        }
        Ok(Self { config, secret, attempts: 0, phase: Phase::AwaitingInput })
    }

    /// The configuration this game was created with.
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Attempts consumed so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempts still available.
    pub fn attempts_left(&self) -> u32 {
        self.config.max_attempts - self.attempts
    }

    /// Whether the game reached a terminal phase (won or lost).
    pub fn is_over(&self) -> bool {
        self.phase != Phase::AwaitingInput
    }

    /// Resolve one raw input line: parse, validate, then guess.
    pub fn submit(&mut self, line: &str) -> Reply {
        match parse_guess(line, &self.config) {
            Ok(value) => self.guess(value),
            Err(rejection) => Reply::Rejected(rejection),
        }
    }

    /// Resolve one already-parsed guess value.
    ///
    /// A valid in-range guess consumes exactly one attempt, right or wrong;
    /// the comparison happens after the counter moves so a winning reply
    /// reports the attempt that won.
    pub fn guess(&mut self, value: i64) -> Reply {
        if self.phase != Phase::AwaitingInput {
            return Reply::Rejected(Rejection::Finished);
        }
        if !self.config.contains(value) {
            return Reply::Rejected(Rejection::OutOfRange {
                min: self.config.min,
                max: self.config.max,
            });
        }

        self.attempts += 1;

        if value == self.secret {
            self.phase = Phase::Won;
            return Reply::Won { attempts: self.attempts };
        }

        let hint = if value < self.secret { Hint::TooLow } else { Hint::TooHigh };

        if self.attempts >= self.config.max_attempts {
            self.phase = Phase::Lost;
            Reply::Lost { hint, secret: self.secret }
        } else {
            Reply::Missed { hint, attempts: self.attempts }
        }
    }
}

/// Classify one raw input line as a guess value or a rejection.
///
/// Parsing happens before the range check so that a syntactically valid but
/// negative or enormous number reads as "out of range", not "not an integer".
pub fn parse_guess(line: &str, config: &GameConfig) -> Result<i64, Rejection> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(Rejection::Empty);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| Rejection::NotAnInteger(trimmed.to_string()))?;

    if !config.contains(value) {
        return Err(Rejection::OutOfRange { min: config.min, max: config.max });
    }

    Ok(value)
}
