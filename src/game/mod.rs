pub mod board;
pub mod collision;
pub mod controller;
pub mod piece;
pub mod scoring;
pub mod snapshot;
pub mod state;

pub use board::{Board, Cell};
pub use controller::DropOutcome;
pub use piece::{Piece, PieceType};
pub use snapshot::Snapshot;
pub use state::{Game, GameState};
