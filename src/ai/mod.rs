//! Computer players.

pub mod random;
pub mod search;
pub mod strategic;

use crate::board::Board;
use crate::error::OthelloError;
use crate::types::{Captures, Position};

pub use random::RandomPlayer;
pub use search::{LogObserver, MinimaxStrategy, SearchObserver, SearchReport, Strategy};
pub use strategic::StrategicPlayer;

/// A move proposed by a computer player, with the cells it would flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerMove {
    pub position: Position,
    pub captures: Captures,
}

/// Anything that can propose a move for a colour without touching the board.
pub trait Player: Send {
    fn propose(&mut self, board: &Board, is_black: bool) -> Result<ComputerMove, OthelloError>;
}
