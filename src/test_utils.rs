use crate::board::{BOARD_SIZE, Board, Cell};

/// Parses eight rows (one per `y`, one character per `x`) of `B`, `W` and `.`.
pub(crate) fn board_from_diagram(rows: [&str; BOARD_SIZE], black_to_move: bool) -> Board {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), BOARD_SIZE, "row {y} must have {BOARD_SIZE} cells");
        for (x, symbol) in row.chars().enumerate() {
            cells[x][y] = match symbol {
                'B' => Cell::Black,
                'W' => Cell::White,
                '.' => Cell::Empty,
                other => panic!("unexpected board symbol {other:?}"),
            };
        }
    }
    Board::from_cells(cells, black_to_move)
}

/// Plays the lowest legal move until `plies` moves were made or the game ended.
pub(crate) fn play_first_moves(plies: usize) -> Board {
    let mut board = Board::new();
    for _ in 0..plies {
        let Some(&mv) = board.legal_moves().keys().next() else {
            break;
        };
        board.place_piece(mv.x, mv.y).expect("first legal move must apply");
    }
    board
}
