use std::fmt;

use once_cell::sync::Lazy;

use crate::error::OthelloError;
use crate::types::{Captures, LegalMoves, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Ray directions as `(dx, dy)`. Direction `i` is the opposite of `7 - i`.
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells visited walking outward from each square, per direction, nearest first.
static RAYS: Lazy<Vec<[Vec<Position>; 8]>> = Lazy::new(|| {
    (0..NUM_SQUARES)
        .map(|index| {
            let from = Position::from_index(index);
            std::array::from_fn(|direction| walk(from, DIRECTIONS[direction]))
        })
        .collect()
});

/// Returns the cells on the ray leaving `from` in `direction`, excluding `from`.
pub(crate) fn ray(from: Position, direction: usize) -> &'static [Position] {
    &RAYS[from.index()][direction]
}

pub(crate) const fn opposite_direction(direction: usize) -> usize {
    DIRECTIONS.len() - 1 - direction
}

fn walk(from: Position, (dx, dy): (i8, i8)) -> Vec<Position> {
    let mut out = Vec::new();
    let mut x = from.x as i8 + dx;
    let mut y = from.y as i8 + dy;
    while in_bounds(x, y) {
        out.push(Position::new(x as u8, y as u8));
        x += dx;
        y += dy;
    }
    out
}

fn in_bounds(x: i8, y: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&x) && (0..BOARD_SIZE as i8).contains(&y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub const fn of(is_black: bool) -> Self {
        if is_black { Self::Black } else { Self::White }
    }

    /// Swaps black and white; empty stays empty.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// 0=empty, 1=black, 2=white.
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Black => 1,
            Self::White => 2,
        }
    }
}

/// Othello board: an 8x8 grid indexed `cells[x][y]` plus the side to move.
///
/// The legal-move map is recomputed eagerly whenever the cells or the mover
/// change, so it always describes the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    black_to_move: bool,
    legal_moves: LegalMoves,
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=white, (3,4)=black, (4,3)=black, (4,4)=white, black to move.
    pub fn new() -> Self {
        let half = BOARD_SIZE / 2;
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[half - 1][half - 1] = Cell::White;
        cells[half - 1][half] = Cell::Black;
        cells[half][half - 1] = Cell::Black;
        cells[half][half] = Cell::White;
        Self::from_cells(cells, true)
    }

    /// Builds a board from raw contents. No pass is applied: if the mover
    /// has no legal move the map is simply empty.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE], black_to_move: bool) -> Self {
        let mut board = Self {
            cells,
            black_to_move,
            legal_moves: LegalMoves::new(),
        };
        board.calculate_legal_moves();
        board
    }

    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// # Panics
    ///
    /// Panics if `pos` is off the board. Use [`Board::get`] for unchecked input.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.x as usize][pos.y as usize]
    }

    /// The cell at `pos`, or `None` outside `0..8` on either axis.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells
            .get(pos.x as usize)
            .and_then(|column| column.get(pos.y as usize))
            .copied()
    }

    pub fn is_black_to_move(&self) -> bool {
        self.black_to_move
    }

    /// Colour of the side to move.
    pub fn mover(&self) -> Cell {
        Cell::of(self.black_to_move)
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal_moves
    }

    /// Legal moves for either colour, regardless of who is to move.
    pub fn legal_moves_for(&self, is_black: bool) -> LegalMoves {
        if is_black == self.black_to_move {
            return self.legal_moves.clone();
        }
        self.scan_moves(is_black)
    }

    pub fn is_legal(&self, pos: Position) -> bool {
        self.legal_moves.contains_key(&pos)
    }

    /// Neither colour can move.
    pub fn is_game_over(&self) -> bool {
        self.legal_moves.is_empty() && self.scan_moves(!self.black_to_move).is_empty()
    }

    /// Opposing cells that a `is_black` stone placed at `(x, y)` would flip.
    ///
    /// Each ray collects a provisional run of opposite-colour cells that is
    /// kept only when the ray reaches a same-colour anchor; rays that hit an
    /// empty cell or the edge first contribute nothing. Returns an empty list
    /// for occupied or out-of-range targets.
    pub fn captured(&self, x: u8, y: u8, is_black: bool) -> Captures {
        let mut captures = Captures::new();
        if !in_bounds(x as i8, y as i8) {
            return captures;
        }
        let target = Position::new(x, y);
        if self.cell(target) != Cell::Empty {
            return captures;
        }

        let same = Cell::of(is_black);
        let opposite = same.opposite();
        for direction in 0..DIRECTIONS.len() {
            let mut run = Vec::new();
            for &next in ray(target, direction) {
                let state = self.cell(next);
                if state == opposite {
                    run.push(next);
                } else {
                    if state == same {
                        captures.append(&mut run);
                    }
                    break;
                }
            }
        }
        captures
    }

    /// Plays `(x, y)` for the side to move and returns the flipped cells.
    ///
    /// After the move the turn passes to the opponent, unless the opponent
    /// has no legal move, in which case the same colour moves again. If that
    /// colour cannot move either the game is over and the legal-move map is
    /// left empty.
    pub fn place_piece(&mut self, x: u8, y: u8) -> Result<Captures, OthelloError> {
        let position = Position::new(x, y);
        let Some(captures) = self.legal_moves.get(&position).cloned() else {
            log::warn!("rejected illegal move at {position}");
            return Err(OthelloError::IllegalMove {
                position,
                board: Box::new(self.clone()),
            });
        };

        let stone = self.mover();
        self.cells[x as usize][y as usize] = stone;
        for capture in &captures {
            self.cells[capture.x as usize][capture.y as usize] = stone;
        }
        log::debug!("{stone:?} plays {position}, flipping {}", captures.len());

        self.black_to_move = !self.black_to_move;
        self.calculate_legal_moves();
        if self.legal_moves.is_empty() {
            log::debug!("{:?} has no legal move and passes", self.mover());
            self.black_to_move = !self.black_to_move;
            self.calculate_legal_moves();
        }

        Ok(captures)
    }

    /// Returns `(black_count, white_count)`.
    pub fn score(&self) -> (u8, u8) {
        let mut black = 0u8;
        let mut white = 0u8;
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
        (black, white)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.score();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` in `x * 8 + y` order, 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for (index, cell) in out.iter_mut().enumerate() {
            *cell = self.cell(Position::from_index(index)).to_u8();
        }
        out
    }

    fn calculate_legal_moves(&mut self) {
        self.legal_moves = self.scan_moves(self.black_to_move);
    }

    fn scan_moves(&self, is_black: bool) -> LegalMoves {
        let mut moves = LegalMoves::new();
        for x in 0..BOARD_SIZE as u8 {
            for y in 0..BOARD_SIZE as u8 {
                let captures = self.captured(x, y, is_black);
                if !captures.is_empty() {
                    moves.insert(Position::new(x, y), captures);
                }
            }
        }
        moves
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One row per `y`, one character per `x`: `B`, `W` or `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let symbol = match self.cells[x][y] {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        let mover = if self.black_to_move { "black" } else { "white" };
        write!(f, "{mover} to move")
    }
}
