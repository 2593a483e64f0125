//! Shared helpers for the guess-game CLI.
//!
//! The exit-code contract lives here as pure functions so it can be unit
//! tested without spawning the binary.

use guess_core::selftest::SelfTestOutcome;
use guess_core::session::SessionOutcome;

/// The player matched the secret, or the self-check passed.
pub const EXIT_WIN: u8 = 0;

/// The player lost or the session aborted (closed input, interrupt).
pub const EXIT_LOSS: u8 = 1;

/// The self-check script ran out without matching its secret. Distinct from
/// `EXIT_LOSS` so automation can tell an internal failure from a normal
/// player loss.
pub const EXIT_SELF_TEST_FAILURE: u8 = 2;

/// Map an interactive session outcome to the process exit code.
pub fn session_exit_code(outcome: &SessionOutcome) -> u8 {
    match outcome {
        SessionOutcome::Won { .. } => EXIT_WIN,
        SessionOutcome::Lost { .. } | SessionOutcome::Aborted => EXIT_LOSS,
    }
}

/// Map a self-check outcome to the process exit code.
pub fn self_test_exit_code(outcome: &SelfTestOutcome) -> u8 {
    match outcome {
        SelfTestOutcome::Passed { .. } => EXIT_WIN,
        SelfTestOutcome::Failed { .. } => EXIT_SELF_TEST_FAILURE,
    }
}
