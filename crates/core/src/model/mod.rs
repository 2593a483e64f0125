//! Core data model for a single game.
//!
//! A game is fully described by its configuration (guess bounds plus attempt
//! budget) and the secret it is played against. Nothing here outlives one
//! game invocation; there is deliberately no persisted or shared state.

/// Inclusive guess bounds and attempt budget for one game.
///
/// This is an immutable configuration value injected at game construction,
/// not a mutable global. The standard game is 1..=100 with 5 attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Smallest valid guess (inclusive).
    pub min: i64,
    /// Largest valid guess (inclusive).
    pub max: i64,
    /// Number of valid guesses a player may spend before losing.
    pub max_attempts: u32,
}

impl GameConfig {
    /// The standard game: secret in [1, 100], 5 attempts.
    pub const fn standard() -> Self {
        Self { min: 1, max: 100, max_attempts: 5 }
    }

    /// Whether `value` lies within the configured guess bounds.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
