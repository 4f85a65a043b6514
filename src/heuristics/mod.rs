//! Board evaluation functions.
//!
//! Every heuristic scores a position from the perspective of the side to
//! move: positive values favour the mover.

pub mod stability;

use serde::{Deserialize, Serialize};

use crate::board::{BOARD_SIZE, Board, Cell};
use crate::error::OthelloError;
use crate::types::Position;

pub use stability::stability;

/// A heuristic as a first-class value, handed to a strategy at construction.
pub type HeuristicFn = fn(&Board) -> Result<f64, OthelloError>;

const LAST: u8 = BOARD_SIZE as u8 - 1;
pub(crate) const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, LAST),
    Position::new(LAST, 0),
    Position::new(LAST, LAST),
];

/// Corner control only counts while at most this many pieces are on the board.
const CORNER_PHASE_LIMIT: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    CoinParity,
    Corners,
    Mobility,
    Stability,
    Composite,
}

impl HeuristicKind {
    pub fn function(self) -> HeuristicFn {
        match self {
            Self::CoinParity => coin_parity,
            Self::Corners => corners,
            Self::Mobility => mobility,
            Self::Stability => stability,
            Self::Composite => composite,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CoinParity => "Coin Parity",
            Self::Corners => "Corners",
            Self::Mobility => "Mobility",
            Self::Stability => "Stability",
            Self::Composite => "Composite",
        }
    }
}

/// Piece-count lead as a signed percentage of all pieces.
pub fn coin_parity(board: &Board) -> Result<f64, OthelloError> {
    let (black, white) = board.score();
    Ok(for_mover(board, percentage_lead(f64::from(black), f64::from(white))))
}

/// 25 points per corner held, minus the opponent's corners.
pub fn corners(board: &Board) -> Result<f64, OthelloError> {
    let mut black = 0i32;
    let mut white = 0i32;
    for corner in CORNERS {
        match board.cell(corner) {
            Cell::Black => black += 1,
            Cell::White => white += 1,
            Cell::Empty => {}
        }
    }
    Ok(for_mover(board, f64::from(25 * (black - white))))
}

/// Share of empty squares the mover cannot play on.
pub fn mobility(board: &Board) -> Result<f64, OthelloError> {
    let empty = f64::from(board.empty_count());
    if empty == 0.0 {
        return Ok(0.0);
    }
    let moves = board.legal_moves().len() as f64;
    Ok(100.0 * (empty - moves) / empty)
}

/// Weighted sum of the other heuristics. Corners are ignored once more than
/// 40 pieces are on the board.
pub fn composite(board: &Board) -> Result<f64, OthelloError> {
    let (black, white) = board.score();
    let corner_term = if black + white <= CORNER_PHASE_LIMIT {
        500.0 * corners(board)?
    } else {
        0.0
    };
    Ok(10.0 * coin_parity(board)?
        + corner_term
        + 80.0 * mobility(board)?
        + 50.0 * stability(board)?)
}

/// `100 * (black - white) / (black + white)`, zero on a tie.
pub(crate) fn percentage_lead(black: f64, white: f64) -> f64 {
    if black == white {
        return 0.0;
    }
    100.0 * (black - white) / (black + white)
}

pub(crate) fn for_mover(board: &Board, black_score: f64) -> f64 {
    if board.is_black_to_move() {
        black_score
    } else {
        -black_score
    }
}
