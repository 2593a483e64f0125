use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use guess_core::engine::Game;
use guess_core::model::GameConfig;
use guess_core::secret::{RandomSecret, SecretSource};
use guess_core::session::FAREWELL;
use guess_game::{self_test_exit_code, session_exit_code, EXIT_LOSS};

/// Bounded number-guessing game CLI.
///
/// This CLI is a thin wrapper around `guess-core` (exposed in code as
/// `guess_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "guess-game",
    version,
    about = "Guess a secret number between 1 and 100 in 5 attempts",
    long_about = None
)]
struct Cli {
    /// Run the deterministic non-interactive self-check instead of a game.
    #[arg(long, default_value_t = false)]
    self_test: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_LOSS)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    if cli.self_test {
        self_test_command()
    } else {
        play_command()
    }
}

/// Play one interactive game against a random secret on stdin/stdout.
fn play_command() -> Result<u8> {
    // Ctrl+C lands on the handler's dedicated thread while the main thread
    // sits in the blocking stdin read, so the abort is taken here: farewell,
    // no secret reveal, same exit code as any other abort.
    ctrlc::set_handler(|| {
        println!("\n{FAREWELL}");
        std::process::exit(i32::from(EXIT_LOSS));
    })
    .context("Failed to set Ctrl+C handler")?;

    let config = GameConfig::standard();
    let secret = RandomSecret.pick(&config);
    let mut game =
        Game::new(secret, config).context("Failed to set up the game")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let outcome = guess_core::session::play(&mut game, &mut input, &mut out)
        .context("Failed to write game output")?;

    Ok(session_exit_code(&outcome))
}

/// Run the deterministic self-check and report its outcome.
fn self_test_command() -> Result<u8> {
    let mut out = io::stdout();
    let outcome = guess_core::selftest::run(&mut out)
        .context("Failed to write self-test output")?;

    Ok(self_test_exit_code(&outcome))
}
