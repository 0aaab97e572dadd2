//! Alternate-screen setup and teardown around a game session.

use std::io::{self, stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;

pub fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, Hide)
}

pub fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Best-effort teardown: every step runs even if an earlier one fails, and
/// the first failure is reported.
pub fn restore() -> Result<()> {
    let raw = terminal::disable_raw_mode().context("failed to disable raw mode");
    let screen = leave_screen(&mut stdout()).context("failed to leave alternate screen");
    raw.and(screen)
}

/// Combine the session result with the teardown result. A session error
/// wins; a teardown error behind it is only logged.
pub fn session_result(run: Result<()>, restored: Result<()>) -> Result<()> {
    match (run, restored) {
        (Err(err), Err(restore_err)) => {
            warn!("terminal restore also failed: {:#}", restore_err);
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored,
    }
}
