use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    terminal,
};
use log::{debug, info};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    io::{stdout, Stdout},
    time::{Duration, Instant},
};

use blockfall::config::Args;
use blockfall::game::Game;
use blockfall::input::{handle_input, Command};
use blockfall::logging;
use blockfall::ui::{screen, ui};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), args.log_level)?;
    debug!("{:?}", args);

    let mut game = match args.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let result = play(&mut game, Duration::from_millis(args.frame_ms));

    // Cleanup, even when setup or the loop failed
    let restored = screen::restore();

    info!("exiting with score {}", game.score());
    screen::session_result(result, restored)
}

fn play(game: &mut Game, frame: Duration) -> Result<()> {
    let mut stdout = stdout();
    screen::enter_screen(&mut stdout).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
    run(&mut terminal, game, frame)
}

fn run(terminal: &mut Term, game: &mut Game, frame: Duration) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal
            .draw(|f| ui(f, &game.snapshot()))
            .context("failed to draw frame")?;

        if event::poll(frame)? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if handle_input(game, code, kind) == Some(Command::Quit) {
                    return Ok(());
                }
            }
        }

        let now = Instant::now();
        game.tick(now.duration_since(last_frame));
        last_frame = now;
    }
}
