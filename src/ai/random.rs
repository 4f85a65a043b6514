use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::{ComputerMove, Player};
use crate::board::{BOARD_SIZE, Board};
use crate::error::OthelloError;
use crate::types::Position;

/// Plays uniformly sampled coordinates until one of them is legal.
#[derive(Debug, Clone)]
pub struct RandomPlayer<R = StdRng> {
    rng: R,
}

impl RandomPlayer<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomPlayer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPlayer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> Player for RandomPlayer<R> {
    fn propose(&mut self, board: &Board, is_black: bool) -> Result<ComputerMove, OthelloError> {
        let moves = board.legal_moves_for(is_black);
        if moves.is_empty() {
            return Err(OthelloError::NoLegalMoves);
        }

        let size = BOARD_SIZE as u8;
        loop {
            let position = Position::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            if let Some(captures) = moves.get(&position) {
                return Ok(ComputerMove {
                    position,
                    captures: captures.clone(),
                });
            }
        }
    }
}
