//! Stability classification.
//!
//! A piece is stable when, along all four axes (horizontal, vertical and both
//! diagonals), it sits in a completely filled line or next to a stable piece
//! of its own colour. A piece is unstable if the side to move can flip it
//! right now. Everything else is semi-stable.

use crate::board::{BOARD_SIZE, Board, Cell, opposite_direction, ray};
use crate::error::OthelloError;
use crate::types::Position;

use super::{CORNERS, for_mover, percentage_lead};

/// Direction indices `(1,0)`, `(0,1)`, `(1,1)`, `(1,-1)`; each axis is the
/// direction plus its opposite.
const AXES: [usize; 4] = [6, 4, 7, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stability {
    Stable,
    SemiStable,
    Unstable,
}

impl Stability {
    fn points(self) -> u32 {
        match self {
            Self::Stable => 2,
            Self::SemiStable => 1,
            Self::Unstable => 0,
        }
    }
}

/// Per-cell classification indexed `[x][y]`; `None` for empty cells.
pub type StabilityMap = [[Option<Stability>; BOARD_SIZE]; BOARD_SIZE];

/// Classifies every occupied cell, iterating until no more semi-stable
/// pieces can be promoted.
pub fn classify(board: &Board) -> Result<StabilityMap, OthelloError> {
    let mut map: StabilityMap = [[None; BOARD_SIZE]; BOARD_SIZE];
    for (x, column) in board.cells().iter().enumerate() {
        for (y, cell) in column.iter().enumerate() {
            if *cell != Cell::Empty {
                map[x][y] = Some(Stability::SemiStable);
            }
        }
    }

    mark_unstable(board, &mut map);
    mark_corner_edges(board, &mut map);

    loop {
        let mut changed = false;
        for index in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Position::from_index(index);
            if at(&map, pos) != Some(Stability::SemiStable) {
                continue;
            }
            if is_stable(board, &map, pos)? {
                set(&mut map, pos, Stability::Stable);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    Ok(map)
}

/// Stability points (2 per stable, 1 per semi-stable piece) as a signed
/// percentage lead for the mover.
pub fn stability(board: &Board) -> Result<f64, OthelloError> {
    let map = classify(board)?;
    let mut black = 0u32;
    let mut white = 0u32;
    for index in 0..BOARD_SIZE * BOARD_SIZE {
        let pos = Position::from_index(index);
        let Some(stability) = at(&map, pos) else {
            continue;
        };
        match board.cell(pos) {
            Cell::Black => black += stability.points(),
            Cell::White => white += stability.points(),
            Cell::Empty => {}
        }
    }
    Ok(for_mover(
        board,
        percentage_lead(f64::from(black), f64::from(white)),
    ))
}

fn mark_unstable(board: &Board, map: &mut StabilityMap) {
    for capture in board.legal_moves().values().flatten() {
        set(map, *capture, Stability::Unstable);
    }
}

/// Same-colour runs leaving an occupied corner along its row and column.
fn mark_corner_edges(board: &Board, map: &mut StabilityMap) {
    for corner in CORNERS {
        let color = board.cell(corner);
        if color == Cell::Empty {
            continue;
        }
        set(map, corner, Stability::Stable);

        let along_x = if corner.x == 0 { 6 } else { 1 };
        let along_y = if corner.y == 0 { 4 } else { 3 };
        for direction in [along_x, along_y] {
            for &pos in ray(corner, direction) {
                if board.cell(pos) != color {
                    break;
                }
                set(map, pos, Stability::Stable);
            }
        }
    }
}

fn is_stable(board: &Board, map: &StabilityMap, pos: Position) -> Result<bool, OthelloError> {
    let color = board.cell(pos);
    if color == Cell::Empty {
        return Err(OthelloError::StabilityInvariantViolation(pos));
    }

    Ok(AXES.iter().all(|&direction| {
        let back = opposite_direction(direction);
        stable_neighbour(board, map, pos, color, direction)
            || stable_neighbour(board, map, pos, color, back)
            || line_filled(board, pos, direction)
    }))
}

fn stable_neighbour(
    board: &Board,
    map: &StabilityMap,
    pos: Position,
    color: Cell,
    direction: usize,
) -> bool {
    ray(pos, direction).first().is_some_and(|&next| {
        board.cell(next) == color && at(map, next) == Some(Stability::Stable)
    })
}

fn line_filled(board: &Board, pos: Position, direction: usize) -> bool {
    ray(pos, direction)
        .iter()
        .chain(ray(pos, opposite_direction(direction)))
        .all(|&cell| board.cell(cell) != Cell::Empty)
}

fn at(map: &StabilityMap, pos: Position) -> Option<Stability> {
    map[pos.x as usize][pos.y as usize]
}

fn set(map: &mut StabilityMap, pos: Position, stability: Stability) {
    map[pos.x as usize][pos.y as usize] = Some(stability);
}
