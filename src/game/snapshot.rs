use crate::game::board::Board;
use crate::game::piece::Piece;

/// Read-only view of a game handed to the renderer each frame.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub piece: Option<&'a Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u64,
    pub game_over: bool,
    pub game_started: bool,
    /// Rows flashing before removal.
    pub clearing_rows: &'a [usize],
}

impl Snapshot<'_> {
    pub fn is_clearing(&self, row: usize) -> bool {
        self.clearing_rows.contains(&row)
    }
}
