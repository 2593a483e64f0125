//! Interactive session driver.
//!
//! `play` runs one full game over any `BufRead` input and `Write` output:
//! one status line and prompt per iteration, one line read, one transition.
//! Tests inject byte slices and capture output in a `Vec<u8>`; the CLI hands
//! in locked stdin and stdout.

use std::io::{self, BufRead, Write};

use crate::engine::{Game, Hint, Reply};
use crate::render::hearts_status;

/// Farewell line for an aborted session. Shared with the CLI's interrupt
/// handler so both abort paths read the same.
pub const FAREWELL: &str = "Goodbye.";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player matched the secret within the budget.
    Won { attempts: u32 },
    /// The budget ran out; `secret` is what was revealed to the player.
    Lost { secret: i64 },
    /// The input stream ended (or errored) while awaiting a guess. The
    /// secret stays unrevealed and no attempt is consumed.
    Aborted,
}

/// Drive `game` to a terminal outcome, reading one line per attempt.
///
/// End-of-input and read errors (including an interrupted read) abort the
/// session gracefully with a farewell line rather than surfacing an error;
/// the returned `io::Result` only covers failures writing to `out`.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
) -> io::Result<SessionOutcome> {
    // A game already at a terminal phase has no input left to consume;
    // entering the loop would re-prompt on `Rejection::Finished` until EOF.
    if game.is_over() {
        return Ok(SessionOutcome::Aborted);
    }

    let config = game.config();
    writeln!(
        out,
        "Guess the number between {} and {}! You have {} attempts.",
        config.min, config.max, config.max_attempts
    )?;

    loop {
        writeln!(
            out,
            "Chances left: {}  (attempt {}/{})",
            hearts_status(game.attempts(), config.max_attempts),
            game.attempts(),
            config.max_attempts
        )?;
        write!(out, "Attempt {}> ", game.attempts() + 1)?;
        out.flush()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                // Closed stream and interrupted reads both land here: the
                // session ends without revealing the secret.
                writeln!(out)?;
                writeln!(out, "{FAREWELL}")?;
                return Ok(SessionOutcome::Aborted);
            }
            Ok(_) => {}
        }

        match game.submit(&line) {
            Reply::Rejected(reason) => writeln!(out, "{reason}")?,
            Reply::Missed { hint, attempts: _ } => writeln!(out, "{}", hint_line(hint))?,
            Reply::Won { attempts } => {
                writeln!(out, "Correct! You got it in {attempts} attempt(s). Congratulations!")?;
                return Ok(SessionOutcome::Won { attempts });
            }
            Reply::Lost { hint, secret } => {
                writeln!(out, "{}", hint_line(hint))?;
                writeln!(out, "Out of chances. The number was {secret}. Try again next time!")?;
                return Ok(SessionOutcome::Lost { secret });
            }
        }
    }
}

fn hint_line(hint: Hint) -> &'static str {
    match hint {
        Hint::TooLow => "Too low.",
        Hint::TooHigh => "Too high.",
    }
}
