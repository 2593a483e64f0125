//! Deterministic self-check.
//!
//! Replays a fixed guess script against a fixed secret through the same
//! `Game` transitions the interactive session uses, with no interactive
//! read. The script is chosen so the match lands on the third guess; a
//! script that runs out without matching signals an internal failure, which
//! the CLI reports with its own exit code, distinct from a normal loss.

use std::io::{self, Write};

use crate::engine::{Game, Reply};
use crate::model::GameConfig;
use crate::render::hearts_status;
use crate::secret::{FixedSecret, SecretSource};
use crate::version;

/// Secret the self-check plays against.
pub const SELF_TEST_SECRET: i64 = 3;

/// Scripted guesses; the third entry matches `SELF_TEST_SECRET`.
pub const SELF_TEST_GUESSES: [i64; 5] = [1, 2, 3, 4, 5];

/// How the self-check ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelfTestOutcome {
    /// The scripted match was found; `attempts` is the winning attempt.
    Passed { attempts: u32 },
    /// The script ran out without matching `secret`.
    Failed { secret: i64 },
}

/// Run the standard self-check: `SELF_TEST_GUESSES` against
/// `SELF_TEST_SECRET`, expected to pass on the third guess.
pub fn run<W: Write>(out: &mut W) -> io::Result<SelfTestOutcome> {
    let config = GameConfig::standard();
    let secret = FixedSecret(SELF_TEST_SECRET).pick(&config);
    run_scripted(secret, &SELF_TEST_GUESSES, out)
}

/// Replay an arbitrary guess script against `secret` on the standard game.
///
/// Exposed separately so mutated scripts (no matching guess) can be driven
/// in tests without touching the standard constants.
pub fn run_scripted<W: Write>(
    secret: i64,
    guesses: &[i64],
    out: &mut W,
) -> io::Result<SelfTestOutcome> {
    let config = GameConfig::standard();
    writeln!(out, "[self-test] guess-core v{}", version())?;

    let mut game = match Game::new(secret, config) {
        Ok(game) => game,
        Err(err) => {
            writeln!(out, "[self-test] setup failed: {err}")?;
            return Ok(SelfTestOutcome::Failed { secret });
        }
    };

    for &guess in guesses.iter().take(config.max_attempts as usize) {
        writeln!(
            out,
            "[self-test] attempt {}/{} left: {}",
            game.attempts() + 1,
            config.max_attempts,
            hearts_status(game.attempts(), config.max_attempts)
        )?;
        match game.guess(guess) {
            Reply::Won { attempts } => {
                writeln!(out, "[self-test] secret={secret}, attempts={attempts} (ok)")?;
                return Ok(SelfTestOutcome::Passed { attempts });
            }
            Reply::Missed { .. } | Reply::Lost { .. } => {}
            Reply::Rejected(reason) => {
                writeln!(out, "[self-test] guess {guess} rejected: {reason}")?;
            }
        }
    }

    writeln!(
        out,
        "[self-test] failed: secret={secret} not found within {} attempts",
        config.max_attempts
    )?;
    Ok(SelfTestOutcome::Failed { secret })
}
