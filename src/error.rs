use crate::board::Board;
use crate::types::Position;

/// Errors raised by the rules engine, the players and the session.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OthelloError {
    /// The coordinate is not a key of the current legal-move map.
    #[error("illegal move at {position}\n{board}")]
    IllegalMove {
        position: Position,
        board: Box<Board>,
    },

    #[error("position out of bounds: ({x},{y})")]
    OutOfBounds { x: u8, y: u8 },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("no move was selected")]
    NoMoveSelected,

    #[error("tried to check stability of empty cell {0}")]
    StabilityInvariantViolation(Position),

    #[error("it is not the player's turn")]
    NotPlayersTurn,

    #[error("game is already over")]
    GameOver,
}
