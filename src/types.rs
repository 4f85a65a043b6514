use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A board coordinate, indexed `cells[x][y]`.
///
/// Ordering is `(x, y)` lexicographic; legal moves are iterated in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Flat index `x * 8 + y` used by serialized snapshots.
    pub const fn index(self) -> usize {
        self.x as usize * 8 + self.y as usize
    }

    pub const fn from_index(index: usize) -> Self {
        Self {
            x: (index / 8) as u8,
            y: (index % 8) as u8,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Cells flipped by a placement, in ray order.
pub type Captures = Vec<Position>;

/// Candidate cell -> cells it captures. A move is legal iff it is a key.
pub type LegalMoves = BTreeMap<Position, Captures>;

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Flat `x * 8 + y` layout; 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// `true` when the last move left the opponent without a reply, so the
    /// same colour moves again.
    pub is_pass: bool,
    pub last_move: Option<Position>,
    /// Cells flipped by the last move. Empty before the first move.
    pub flipped: Vec<Position>,
    pub legal_moves: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 0 on a draw.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}
