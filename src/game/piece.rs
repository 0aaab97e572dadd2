use rand::Rng;
use ratatui::style::Color;

use crate::constants::{SPAWN_X, SPAWN_Y};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    I, J, L, O, S, T, Z
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::I, PieceType::J, PieceType::L, PieceType::O,
        PieceType::S, PieceType::T, PieceType::Z,
    ];

    /// Base orientation of the piece as a square occupancy matrix.
    pub fn shape(self) -> Vec<Vec<bool>> {
        let rows: &[&[u8]] = match self {
            PieceType::I => &[
                &[0, 1, 0, 0],
                &[0, 1, 0, 0],
                &[0, 1, 0, 0],
                &[0, 1, 0, 0],
            ],
            PieceType::J => &[
                &[1, 0, 0],
                &[1, 1, 1],
                &[0, 0, 0],
            ],
            PieceType::L => &[
                &[0, 0, 1],
                &[1, 1, 1],
                &[0, 0, 0],
            ],
            PieceType::O => &[
                &[1, 1],
                &[1, 1],
            ],
            PieceType::S => &[
                &[0, 1, 1],
                &[1, 1, 0],
                &[0, 0, 0],
            ],
            PieceType::T => &[
                &[0, 1, 0],
                &[1, 1, 1],
                &[0, 0, 0],
            ],
            PieceType::Z => &[
                &[1, 1, 0],
                &[0, 1, 1],
                &[0, 0, 0],
            ],
        };

        rows.iter()
            .map(|row| row.iter().map(|&cell| cell != 0).collect())
            .collect()
    }

    pub fn color(self) -> Color {
        match self {
            PieceType::I => Color::Rgb(0x00, 0xf5, 0xff),
            PieceType::J => Color::Rgb(0x00, 0x00, 0xff),
            PieceType::L => Color::Rgb(0xff, 0x7f, 0x00),
            PieceType::O => Color::Rgb(0xff, 0xff, 0x00),
            PieceType::S => Color::Rgb(0x00, 0xff, 0x00),
            PieceType::T => Color::Rgb(0x80, 0x00, 0x80),
            PieceType::Z => Color::Rgb(0xff, 0x00, 0x00),
        }
    }

    /// Independent uniform draw over the seven kinds.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub piece_type: PieceType,
    pub shape: Vec<Vec<bool>>,
    pub x: i32,
    pub y: i32,
    /// Set once the piece has landed and been merged into the board.
    pub collided: bool,
}

impl Piece {
    pub fn new(piece_type: PieceType) -> Self {
        Self {
            piece_type,
            shape: piece_type.shape(),
            x: SPAWN_X,
            y: SPAWN_Y,
            collided: false,
        }
    }

    pub fn width(&self) -> usize {
        self.shape.first().map_or(0, |row| row.len())
    }

    pub fn rotate_clockwise(&self) -> Self {
        let mut rotated = self.clone();
        let size = self.shape.len();
        let mut new_shape = vec![vec![false; size]; size];

        for i in 0..size {
            for j in 0..size {
                new_shape[j][size - 1 - i] = self.shape[i][j];
            }
        }

        rotated.shape = new_shape;
        rotated
    }

    /// Absolute board coordinates `(x, y)` of every occupied cell.
    pub fn get_blocks(&self) -> Vec<(i32, i32)> {
        let mut blocks = Vec::new();
        for (i, row) in self.shape.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell {
                    blocks.push((self.x + j as i32, self.y + i as i32));
                }
            }
        }
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn grid(rows: &[&[u8]]) -> Vec<Vec<bool>> {
        rows.iter()
            .map(|row| row.iter().map(|&c| c != 0).collect())
            .collect()
    }

    #[test]
    fn every_piece_has_four_cells_in_a_square_matrix() {
        for kind in PieceType::ALL {
            let shape = kind.shape();
            assert!(shape.iter().all(|row| row.len() == shape.len()), "{:?}", kind);
            let cells = shape.iter().flatten().filter(|&&c| c).count();
            assert_eq!(cells, 4, "{:?}", kind);
        }
    }

    #[test]
    fn colors_are_distinct() {
        let colors: HashSet<String> = PieceType::ALL
            .iter()
            .map(|kind| format!("{:?}", kind.color()))
            .collect();
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn new_piece_spawns_at_anchor() {
        let piece = Piece::new(PieceType::T);
        assert_eq!((piece.x, piece.y), (4, 0));
        assert!(!piece.collided);
        assert_eq!(piece.width(), 3);
    }

    #[test]
    fn rotate_t_clockwise() {
        let rotated = Piece::new(PieceType::T).rotate_clockwise();
        assert_eq!(rotated.shape, grid(&[
            &[0, 1, 0],
            &[0, 1, 1],
            &[0, 1, 0],
        ]));
    }

    #[test]
    fn rotate_i_to_horizontal() {
        let rotated = Piece::new(PieceType::I).rotate_clockwise();
        assert_eq!(rotated.shape, grid(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]));
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceType::ALL {
            let piece = Piece::new(kind);
            let back = piece
                .rotate_clockwise()
                .rotate_clockwise()
                .rotate_clockwise()
                .rotate_clockwise();
            assert_eq!(back, piece);
        }
    }

    #[test]
    fn o_rotation_is_identity() {
        let piece = Piece::new(PieceType::O);
        assert_eq!(piece.rotate_clockwise(), piece);
    }

    #[test]
    fn blocks_are_offset_by_position() {
        let mut piece = Piece::new(PieceType::O);
        piece.x = 6;
        piece.y = 18;
        let mut blocks = piece.get_blocks();
        blocks.sort();
        assert_eq!(blocks, vec![(6, 18), (6, 19), (7, 18), (7, 19)]);
    }

    #[test]
    fn random_draw_covers_all_kinds() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<PieceType> = (0..500).map(|_| PieceType::random(&mut rng)).collect();
        assert_eq!(seen.len(), 7);
    }
}
