use crate::ai::{ComputerMove, Player};
use crate::board::{BOARD_SIZE, Board};
use crate::config::OpponentConfig;
use crate::error::OthelloError;
use crate::types::{GameResult, GameState, Position};

pub const PLAYER_BLACK: u8 = 1;
pub const PLAYER_WHITE: u8 = 2;

/// One game as seen by a driver: the live board plus an optional computer
/// opponent playing White.
pub struct GameInstance {
    board: Board,
    config: OpponentConfig,
    opponent: Option<Box<dyn Player>>,
    pub is_game_over: bool,
    pub is_pass: bool,
    pub last_move: Option<Position>,
    pub flipped: Vec<Position>,
}

impl GameInstance {
    pub fn new(config: OpponentConfig) -> Self {
        Self::with_opponent(config, config.build_player())
    }

    /// Uses a caller-supplied opponent instead of building one from `config`.
    pub fn with_opponent(config: OpponentConfig, opponent: Option<Box<dyn Player>>) -> Self {
        Self {
            board: Board::new(),
            config,
            opponent,
            is_game_over: false,
            is_pass: false,
            last_move: None,
            flipped: Vec::new(),
        }
    }

    /// Starts a new game, possibly against a different opponent.
    pub fn reset(&mut self, config: OpponentConfig) {
        log::debug!("new game: {}", config.label());
        *self = Self::new(config);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> OpponentConfig {
        self.config
    }

    pub fn current_player(&self) -> u8 {
        if self.board.is_black_to_move() {
            PLAYER_BLACK
        } else {
            PLAYER_WHITE
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.opponent.is_some() && !self.is_game_over && !self.board.is_black_to_move()
    }

    /// Human move. Against a computer only Black may be placed this way.
    pub fn place(&mut self, x: u8, y: u8) -> Result<(), OthelloError> {
        if self.is_game_over {
            return Err(OthelloError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(OthelloError::NotPlayersTurn);
        }
        let position = checked_position(x, y)?;
        self.apply_move(position)
    }

    /// Asks the opponent for a move without changing the board.
    pub fn propose_ai_move(&mut self) -> Result<ComputerMove, OthelloError> {
        if self.is_game_over {
            return Err(OthelloError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(OthelloError::NotPlayersTurn);
        }
        let board = &self.board;
        let opponent = self
            .opponent
            .as_mut()
            .ok_or(OthelloError::NotPlayersTurn)?;
        opponent.propose(board, false)
    }

    /// Applies a move computed off the live board (e.g. on a worker thread).
    /// Moves that no longer match the position are rejected.
    pub fn apply_computer_move(&mut self, mv: &ComputerMove) -> Result<(), OthelloError> {
        if self.is_game_over {
            return Err(OthelloError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(OthelloError::NotPlayersTurn);
        }
        self.apply_move(mv.position)
    }

    pub fn do_ai_move(&mut self) -> Result<(), OthelloError> {
        let mv = self.propose_ai_move()?;
        self.apply_computer_move(&mv)
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves().keys().copied().collect()
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.score();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player(),
            black_count,
            white_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            last_move: self.last_move,
            flipped: self.flipped.clone(),
            legal_moves: self.legal_moves(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.score();
        GameResult {
            winner: if black_count > white_count {
                PLAYER_BLACK
            } else if white_count > black_count {
                PLAYER_WHITE
            } else {
                0
            },
            black_count,
            white_count,
        }
    }

    fn apply_move(&mut self, position: Position) -> Result<(), OthelloError> {
        let mover = self.board.is_black_to_move();
        let captures = self.board.place_piece(position.x, position.y)?;

        self.last_move = Some(position);
        self.flipped = captures;
        self.is_game_over = self.board.legal_moves().is_empty();
        self.is_pass = !self.is_game_over && self.board.is_black_to_move() == mover;
        if self.is_game_over {
            let (black, white) = self.board.score();
            log::debug!("game over: black {black}, white {white}");
        }

        Ok(())
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        self.board = board;
        self.is_game_over = false;
        self.is_pass = false;
        self.last_move = None;
        self.flipped.clear();
    }
}

fn checked_position(x: u8, y: u8) -> Result<Position, OthelloError> {
    if x as usize >= BOARD_SIZE || y as usize >= BOARD_SIZE {
        return Err(OthelloError::OutOfBounds { x, y });
    }
    Ok(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::HeuristicKind;
    use crate::test_utils::board_from_diagram;

    struct FixedPlayer(Position);

    impl Player for FixedPlayer {
        fn propose(&mut self, board: &Board, is_black: bool) -> Result<ComputerMove, OthelloError> {
            let captures = board.captured(self.0.x, self.0.y, is_black);
            Ok(ComputerMove {
                position: self.0,
                captures,
            })
        }
    }

    #[test]
    fn initial_state_is_correct() {
        let game = GameInstance::new(OpponentConfig::TwoPlayer);
        let state = game.to_game_state();

        assert_eq!(state.current_player, PLAYER_BLACK);
        assert_eq!(state.black_count, 2);
        assert_eq!(state.white_count, 2);
        assert!(!state.is_game_over);
        assert!(!state.is_pass);
        assert!(state.flipped.is_empty());
        assert_eq!(state.last_move, None);
        assert_eq!(state.legal_moves.len(), 4);
    }

    #[test]
    fn illegal_player_move_returns_error() {
        let mut game = GameInstance::new(OpponentConfig::TwoPlayer);
        let err = game.place(0, 0).unwrap_err();

        assert!(matches!(err, OthelloError::IllegalMove { .. }));
        assert!(err.to_string().starts_with("illegal move at (0,0)"));
    }

    #[test]
    fn out_of_range_move_returns_error() {
        let mut game = GameInstance::new(OpponentConfig::TwoPlayer);

        assert_eq!(game.place(8, 2), Err(OthelloError::OutOfBounds { x: 8, y: 2 }));
    }

    #[test]
    fn two_player_game_alternates_human_moves() {
        let mut game = GameInstance::new(OpponentConfig::TwoPlayer);

        game.place(2, 3).unwrap();
        assert_eq!(game.current_player(), PLAYER_WHITE);
        assert!(!game.is_computer_turn());

        game.place(2, 2).unwrap();
        assert_eq!(game.current_player(), PLAYER_BLACK);
        assert_eq!(game.flipped, vec![Position::new(3, 3)]);
        assert_eq!(game.last_move, Some(Position::new(2, 2)));
    }

    #[test]
    fn human_cannot_move_for_the_computer() {
        let mut game = GameInstance::new(OpponentConfig::Random);
        game.place(2, 3).unwrap();

        assert!(game.is_computer_turn());
        assert_eq!(game.place(2, 2), Err(OthelloError::NotPlayersTurn));
    }

    #[test]
    fn computer_replies_after_human_move() {
        let mut game = GameInstance::new(OpponentConfig::Minimax {
            heuristic: HeuristicKind::Composite,
            depth: 2,
        });

        game.place(2, 3).unwrap();
        game.do_ai_move().unwrap();

        let state = game.to_game_state();
        assert_eq!(state.current_player, PLAYER_BLACK);
        assert_eq!(state.black_count + state.white_count, 6);
        assert!(!game.is_computer_turn());
    }

    #[test]
    fn ai_move_is_rejected_on_human_turn() {
        let mut game = GameInstance::new(OpponentConfig::Random);

        assert_eq!(game.do_ai_move(), Err(OthelloError::NotPlayersTurn));
    }

    #[test]
    fn stale_computer_move_is_rejected() {
        let mut game = GameInstance::new(OpponentConfig::Random);
        game.place(2, 3).unwrap();
        let stale = ComputerMove {
            position: Position::new(0, 0),
            captures: Vec::new(),
        };

        let err = game.apply_computer_move(&stale).unwrap_err();

        assert!(matches!(err, OthelloError::IllegalMove { .. }));
        assert!(game.is_computer_turn());
    }

    #[test]
    fn forced_pass_is_reported() {
        let mut game = GameInstance::new(OpponentConfig::TwoPlayer);
        game.set_board_for_test(board_from_diagram(
            [
                "BWW.....",
                "........",
                "........",
                "........",
                "BWW.....",
                "........",
                "........",
                "........",
            ],
            true,
        ));

        game.place(3, 0).unwrap();

        assert!(game.is_pass);
        assert!(!game.is_game_over);
        assert_eq!(game.current_player(), PLAYER_BLACK);
    }

    #[test]
    fn move_ending_the_game_sets_game_over() {
        let mut game = GameInstance::with_opponent(
            OpponentConfig::Random,
            Some(Box::new(FixedPlayer(Position::new(0, 0)))),
        );
        game.set_board_for_test(board_from_diagram(
            [
                ".BW.....",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
            ],
            false,
        ));

        game.do_ai_move().unwrap();
        let state = game.to_game_state();

        assert!(state.is_game_over);
        assert!(!state.is_pass);
        assert_eq!(state.black_count, 0);
        assert_eq!(state.white_count, 3);
        assert_eq!(state.flipped, vec![Position::new(1, 0)]);
        assert_eq!(game.place(5, 5), Err(OthelloError::GameOver));
        assert_eq!(
            game.to_game_result(),
            GameResult {
                winner: PLAYER_WHITE,
                black_count: 0,
                white_count: 3,
            }
        );
    }

    #[test]
    fn reset_starts_a_fresh_game() {
        let mut game = GameInstance::new(OpponentConfig::TwoPlayer);
        game.place(2, 3).unwrap();

        game.reset(OpponentConfig::Random);

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.config(), OpponentConfig::Random);
        assert!(game.last_move.is_none());
    }
}
