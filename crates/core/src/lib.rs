//! guess-core
//!
//! Core library for the bounded number-guessing game.
//!
//! This crate defines the game model, the attempt-loop state machine, secret
//! selection, status rendering, the interactive session driver, and the
//! deterministic self-check.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, tests, etc.).

pub mod engine;
pub mod model;
pub mod render;
pub mod secret;
pub mod selftest;
pub mod session;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
