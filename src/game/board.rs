use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::piece::{Piece, PieceType};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceType),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self != Cell::Empty
    }
}

pub type Row = [Cell; BOARD_WIDTH];

/// Settled cells. Always exactly `BOARD_HEIGHT` rows of `BOARD_WIDTH` cells.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// `None` when `(x, y)` lies outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Cell::is_filled)
    }

    /// Overlay the piece's occupied cells onto the grid. Cells of the
    /// bounding box that the shape leaves empty keep their current value.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.get_blocks() {
            self.set(x, y, Cell::Filled(piece.piece_type));
        }
    }

    /// Indices of fully occupied rows, top to bottom.
    pub fn completed_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().all(|cell| cell.is_filled()))
            .map(|(index, _)| index)
            .collect()
    }

    /// Remove the given rows and backfill empty rows at the top.
    pub fn clear_rows(&mut self, indices: &[usize]) -> usize {
        let mut removed = 0;
        let mut write_row = BOARD_HEIGHT;

        // Walk bottom-up, copying kept rows down over removed ones
        for read_row in (0..BOARD_HEIGHT).rev() {
            if indices.contains(&read_row) {
                removed += 1;
                continue;
            }
            write_row -= 1;
            if read_row != write_row {
                self.rows[write_row] = self.rows[read_row];
            }
        }

        for row in &mut self.rows[..write_row] {
            *row = [Cell::Empty; BOARD_WIDTH];
        }

        removed
    }
}
