#![cfg(unix)]

use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// Ctrl+C while the game waits for a guess takes the abort path: farewell
/// on stdout and the loss/abort exit code, not death by signal.
#[test]
fn sigint_while_awaiting_input_aborts_with_exit_one() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_guess-game"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn guess-game");

    // Give the game time to reach the blocking prompt read, then interrupt.
    // Stdin stays open the whole time so EOF cannot cause the abort instead.
    thread::sleep(Duration::from_millis(500));
    let kill = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .expect("send SIGINT");
    assert!(kill.success(), "kill -INT failed");

    let output = child.wait_with_output().expect("wait for guess-game");

    assert_eq!(
        output.status.code(),
        Some(1),
        "an interrupt should exit through the abort path, not kill the process"
    );
    let stdout = String::from_utf8(output.stdout).expect("utf8 output");
    assert!(stdout.contains("Goodbye."), "farewell missing:\n{stdout}");
    assert!(!stdout.contains("The number was"), "abort must not reveal the secret:\n{stdout}");
}
