use crate::ai::{ComputerMove, Player, Strategy};
use crate::board::Board;
use crate::error::OthelloError;
use crate::heuristics::HeuristicFn;

/// Delegates move choice to a [`Strategy`] driven by a heuristic.
pub struct StrategicPlayer {
    strategy: Box<dyn Strategy>,
    heuristic: HeuristicFn,
}

impl StrategicPlayer {
    pub fn new(strategy: Box<dyn Strategy>, heuristic: HeuristicFn) -> Self {
        Self {
            strategy,
            heuristic,
        }
    }
}

impl Player for StrategicPlayer {
    fn propose(&mut self, board: &Board, is_black: bool) -> Result<ComputerMove, OthelloError> {
        if board.is_black_to_move() != is_black {
            return Err(OthelloError::NotPlayersTurn);
        }

        let moves = board.legal_moves();
        let position = match moves.len() {
            0 => return Err(OthelloError::NoLegalMoves),
            1 => *moves.keys().next().ok_or(OthelloError::NoLegalMoves)?,
            _ => self.strategy.next_move(self.heuristic, board)?,
        };
        let captures = moves
            .get(&position)
            .cloned()
            .ok_or(OthelloError::NoMoveSelected)?;

        Ok(ComputerMove { position, captures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MinimaxStrategy;
    use crate::heuristics::{coin_parity, stability};
    use crate::test_utils::board_from_diagram;
    use crate::types::Position;

    struct FixedStrategy(Position);

    impl Strategy for FixedStrategy {
        fn next_move(
            &self,
            _heuristic: HeuristicFn,
            _board: &Board,
        ) -> Result<Position, OthelloError> {
            Ok(self.0)
        }
    }

    struct PanickingStrategy;

    impl Strategy for PanickingStrategy {
        fn next_move(
            &self,
            _heuristic: HeuristicFn,
            _board: &Board,
        ) -> Result<Position, OthelloError> {
            panic!("search must be bypassed");
        }
    }

    #[test]
    fn no_legal_moves_is_an_error() {
        let board = board_from_diagram(
            [
                "BBB.....",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
            ],
            true,
        );
        let mut player = StrategicPlayer::new(Box::new(PanickingStrategy), coin_parity);

        assert_eq!(player.propose(&board, true), Err(OthelloError::NoLegalMoves));
    }

    #[test]
    fn single_legal_move_bypasses_search() {
        let board = board_from_diagram(
            [
                ".WB.....",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
            ],
            true,
        );
        let mut player = StrategicPlayer::new(Box::new(PanickingStrategy), coin_parity);

        let mv = player.propose(&board, true).unwrap();

        assert_eq!(mv.position, Position::new(0, 0));
        assert_eq!(mv.captures, vec![Position::new(1, 0)]);
    }

    #[test]
    fn several_moves_delegate_to_the_strategy() {
        let mut player = StrategicPlayer::new(
            Box::new(FixedStrategy(Position::new(4, 5))),
            coin_parity,
        );

        let mv = player.propose(&Board::new(), true).unwrap();

        assert_eq!(mv.position, Position::new(4, 5));
        assert_eq!(mv.captures, vec![Position::new(4, 4)]);
    }

    #[test]
    fn strategy_returning_illegal_move_is_rejected() {
        let mut player = StrategicPlayer::new(
            Box::new(FixedStrategy(Position::new(0, 0))),
            coin_parity,
        );

        assert_eq!(
            player.propose(&Board::new(), true),
            Err(OthelloError::NoMoveSelected)
        );
    }

    #[test]
    fn wrong_colour_is_rejected() {
        let mut player = StrategicPlayer::new(Box::new(MinimaxStrategy::new(2)), stability);

        assert_eq!(
            player.propose(&Board::new(), false),
            Err(OthelloError::NotPlayersTurn)
        );
    }

    #[test]
    fn minimax_player_proposes_a_legal_move() {
        let board = Board::new();
        let mut player = StrategicPlayer::new(Box::new(MinimaxStrategy::new(3)), stability);

        let mv = player.propose(&board, true).unwrap();

        assert_eq!(board.legal_moves().get(&mv.position), Some(&mv.captures));
    }
}
