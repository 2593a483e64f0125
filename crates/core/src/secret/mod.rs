//! Secret selection.
//!
//! The secret comes from a `SecretSource` so the interactive game and the
//! deterministic self-check share the same attempt-loop code: interactive
//! play plugs in `RandomSecret`, the self-check plugs in `FixedSecret`.

use rand::Rng;

use crate::model::GameConfig;

/// Source of the target integer for one game.
pub trait SecretSource {
    /// Pick a secret within the configured guess bounds.
    fn pick(&mut self, config: &GameConfig) -> i64;
}

/// Uniform random secret from the thread RNG. Used for interactive play.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSecret;

impl SecretSource for RandomSecret {
    fn pick(&mut self, config: &GameConfig) -> i64 {
        rand::thread_rng().gen_range(config.min..=config.max)
    }
}

/// Fixed secret for reproducible, non-interactive verification.
#[derive(Debug, Clone, Copy)]
pub struct FixedSecret(pub i64);

impl SecretSource for FixedSecret {
    fn pick(&mut self, _config: &GameConfig) -> i64 {
        self.0
    }
}
