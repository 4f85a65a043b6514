use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod heuristics;
pub mod types;
pub mod wasm;

#[cfg(test)]
mod test_utils;

pub use board::{Board, Cell};
pub use error::OthelloError;
pub use types::{Captures, LegalMoves, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
