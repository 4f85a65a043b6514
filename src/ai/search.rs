use std::time::Duration;

use web_time::Instant;

use crate::board::Board;
use crate::error::OthelloError;
use crate::heuristics::HeuristicFn;
use crate::types::Position;

/// Picks a move for the side to move on `board`.
pub trait Strategy: Send + Sync {
    fn next_move(&self, heuristic: HeuristicFn, board: &Board) -> Result<Position, OthelloError>;
}

/// Summary of one completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub best_move: Position,
    pub score: f64,
    pub max_depth: u8,
    pub nodes: u64,
    pub leaves: u64,
    pub elapsed: Duration,
}

/// Diagnostic sink for search results.
pub trait SearchObserver: Send + Sync {
    fn on_search(&self, report: &SearchReport);
}

/// Forwards reports to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_search(&self, report: &SearchReport) {
        log::debug!(
            "minimax depth {} chose {} (score {:.3}) after {} nodes / {} leaves in {:?}",
            report.max_depth,
            report.best_move,
            report.score,
            report.nodes,
            report.leaves,
            report.elapsed
        );
    }
}

#[derive(Debug, Default)]
struct SearchStats {
    nodes: u64,
    leaves: u64,
}

/// Fixed-depth minimax over copied boards.
///
/// Values are always expressed from the root mover's point of view. A child
/// keeps its parent's maximizing/minimizing role when the opponent was forced
/// to pass, and flips it only on a real change of mover. Ties are broken
/// non-strictly, so the later move in `(x, y)` order wins.
pub struct MinimaxStrategy {
    max_depth: u8,
    observer: Box<dyn SearchObserver>,
}

impl MinimaxStrategy {
    /// A zero depth is treated as one.
    pub fn new(max_depth: u8) -> Self {
        Self::with_observer(max_depth, Box::new(LogObserver))
    }

    pub fn with_observer(max_depth: u8, observer: Box<dyn SearchObserver>) -> Self {
        Self {
            max_depth: max_depth.max(1),
            observer,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    fn minimax(
        &self,
        heuristic: HeuristicFn,
        board: &Board,
        depth: u8,
        maximizing: bool,
        root_black: bool,
        stats: &mut SearchStats,
    ) -> Result<f64, OthelloError> {
        stats.nodes += 1;
        if depth >= self.max_depth || board.legal_moves().is_empty() {
            stats.leaves += 1;
            return evaluate(heuristic, board, root_black);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for &mv in board.legal_moves().keys() {
            let mut child = board.clone();
            child.place_piece(mv.x, mv.y)?;
            let role = child_role(board, &child, maximizing);
            let score = self.minimax(heuristic, &child, depth + 1, role, root_black, stats)?;
            if (maximizing && score >= best) || (!maximizing && score <= best) {
                best = score;
            }
        }
        Ok(best)
    }
}

impl Strategy for MinimaxStrategy {
    fn next_move(&self, heuristic: HeuristicFn, board: &Board) -> Result<Position, OthelloError> {
        let started = Instant::now();
        let root_black = board.is_black_to_move();
        let mut stats = SearchStats {
            nodes: 1,
            leaves: 0,
        };

        let mut best: Option<(Position, f64)> = None;
        for &mv in board.legal_moves().keys() {
            let mut child = board.clone();
            child.place_piece(mv.x, mv.y)?;
            let role = child_role(board, &child, true);
            let score = self.minimax(heuristic, &child, 1, role, root_black, &mut stats)?;
            if best.is_none_or(|(_, best_score)| score >= best_score) {
                best = Some((mv, score));
            }
        }

        let (best_move, score) = best.ok_or(OthelloError::NoMoveSelected)?;
        self.observer.on_search(&SearchReport {
            best_move,
            score,
            max_depth: self.max_depth,
            nodes: stats.nodes,
            leaves: stats.leaves,
            elapsed: started.elapsed(),
        });
        Ok(best_move)
    }
}

/// Role of `child` in the tree: unchanged when the same colour moves again.
fn child_role(parent: &Board, child: &Board, maximizing: bool) -> bool {
    if parent.is_black_to_move() == child.is_black_to_move() {
        maximizing
    } else {
        !maximizing
    }
}

fn evaluate(heuristic: HeuristicFn, board: &Board, root_black: bool) -> Result<f64, OthelloError> {
    let score = heuristic(board)?;
    Ok(if board.is_black_to_move() == root_black {
        score
    } else {
        -score
    })
}
