use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{INITIAL_DROP_INTERVAL, LINE_CLEAR_DELAY};
use crate::game::board::Board;
use crate::game::controller::{drop_one_row, move_horizontal, rotate, DropOutcome};
use crate::game::piece::{Piece, PieceType};
use crate::game::scoring::{drop_interval_for_level, level_for_lines, line_clear_points};
use crate::game::snapshot::Snapshot;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GameState {
    NotStarted,
    Playing,
    /// Completed rows are flashing; gravity and piece input are suspended.
    LineClearing { rows: Vec<usize>, remaining: Duration },
    GameOver,
}

pub struct Game {
    board: Board,
    current_piece: Option<Piece>,
    score: u32,
    level: u32,
    lines_cleared: u32,
    drop_interval: u64,
    drop_timer: Duration,
    game_state: GameState,
    rng: StdRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Same seed, same piece sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            current_piece: None,
            score: 0,
            level: 1,
            lines_cleared: 0,
            drop_interval: INITIAL_DROP_INTERVAL,
            drop_timer: Duration::ZERO,
            game_state: GameState::NotStarted,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current_piece.as_ref()
    }

    pub fn state(&self) -> &GameState {
        &self.game_state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn drop_interval(&self) -> u64 {
        self.drop_interval
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state == GameState::GameOver
    }

    pub fn is_started(&self) -> bool {
        matches!(
            self.game_state,
            GameState::Playing | GameState::LineClearing { .. }
        )
    }

    /// Start (or restart) a session with a random first piece.
    pub fn start(&mut self) {
        let first = PieceType::random(&mut self.rng);
        self.start_with(first);
    }

    /// Start (or restart) a session with the given first piece. Any pending
    /// line clear from the previous session is dropped.
    pub fn start_with(&mut self, first: PieceType) {
        self.board = Board::new();
        self.score = 0;
        self.level = 1;
        self.lines_cleared = 0;
        self.drop_interval = INITIAL_DROP_INTERVAL;
        self.drop_timer = Duration::ZERO;
        self.game_state = GameState::Playing;
        self.place_piece(Piece::new(first));
        info!("new game started with {:?}", first);
    }

    fn spawn_piece(&mut self) {
        let piece_type = PieceType::random(&mut self.rng);
        self.place_piece(Piece::new(piece_type));
    }

    // No overlap check here; a blocked spawn surfaces on the next drop.
    fn place_piece(&mut self, piece: Piece) {
        debug!("spawned {:?} at ({}, {})", piece.piece_type, piece.x, piece.y);
        self.current_piece = Some(piece);
    }

    pub fn move_piece(&mut self, dir: i32) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }
        match self.current_piece.as_mut() {
            Some(piece) => move_horizontal(piece, &self.board, dir),
            None => false,
        }
    }

    pub fn rotate_piece(&mut self) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }
        match self.current_piece.as_mut() {
            Some(piece) => rotate(piece, &self.board),
            None => false,
        }
    }

    /// Player-requested single-row drop. Gravity keeps its own cadence.
    pub fn soft_drop(&mut self) {
        if self.game_state != GameState::Playing {
            return;
        }
        self.drop_piece();
    }

    fn drop_piece(&mut self) -> Option<DropOutcome> {
        let piece = self.current_piece.as_mut()?;
        let outcome = drop_one_row(piece, &self.board);

        match outcome {
            DropOutcome::Moved => {}
            DropOutcome::Landed => {
                piece.collided = true;
                self.board.merge(piece);
                debug!("{:?} landed at ({}, {})", piece.piece_type, piece.x, piece.y);
                self.check_lines();
            }
            DropOutcome::Blocked => self.finish_game(),
        }

        Some(outcome)
    }

    fn check_lines(&mut self) {
        let rows = self.board.completed_rows();
        if rows.is_empty() {
            self.spawn_piece();
        } else {
            debug!("rows {:?} completed", rows);
            self.game_state = GameState::LineClearing {
                rows,
                remaining: Duration::from_millis(LINE_CLEAR_DELAY),
            };
        }
    }

    fn finish_line_clear(&mut self) {
        let GameState::LineClearing { rows, .. } =
            std::mem::replace(&mut self.game_state, GameState::Playing)
        else {
            return;
        };

        let cleared = self.board.clear_rows(&rows) as u32;
        self.lines_cleared = self.lines_cleared.saturating_add(cleared);
        self.level = level_for_lines(self.lines_cleared);
        self.score = self.score.saturating_add(line_clear_points(cleared, self.level));
        self.drop_interval = drop_interval_for_level(self.level);

        info!(
            "cleared {} line(s): score {}, level {}, lines {}",
            cleared, self.score, self.level, self.lines_cleared
        );

        self.spawn_piece();
    }

    fn finish_game(&mut self) {
        self.game_state = GameState::GameOver;
        self.drop_interval = 0;
        info!(
            "game over: score {}, level {}, lines {}",
            self.score, self.level, self.lines_cleared
        );
    }

    /// Advance timers by `elapsed`. Gravity catches up on every interval
    /// that elapsed, carrying the remainder into the next call.
    pub fn tick(&mut self, elapsed: Duration) {
        match self.game_state {
            GameState::NotStarted | GameState::GameOver => {}
            GameState::LineClearing { ref mut remaining, .. } => {
                *remaining = remaining.saturating_sub(elapsed);
                if remaining.is_zero() {
                    self.finish_line_clear();
                }
            }
            GameState::Playing => {
                self.drop_timer += elapsed;
                let interval = Duration::from_millis(self.drop_interval);
                while self.game_state == GameState::Playing && self.drop_timer >= interval {
                    self.drop_timer -= interval;
                    self.drop_piece();
                }
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let clearing_rows = match &self.game_state {
            GameState::LineClearing { rows, .. } => rows.as_slice(),
            _ => &[][..],
        };

        Snapshot {
            board: &self.board,
            piece: self.current_piece.as_ref(),
            score: self.score,
            level: self.level,
            lines: self.lines_cleared,
            drop_interval_ms: self.drop_interval,
            game_over: self.is_game_over(),
            game_started: self.is_started(),
            clearing_rows,
        }
    }
}
