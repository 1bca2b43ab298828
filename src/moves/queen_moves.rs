//! Queen movement pattern: rook or bishop lines with a clear path.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_patterns::path_clear;

pub fn queen_pattern(board: &Board, from: Square, to: Square) -> bool {
    let d_row = to.0 - from.0;
    let d_col = to.1 - from.1;
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return false;
    }
    path_clear(board, from, to)
}
