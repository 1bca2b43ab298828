//! Rook movement pattern: ranks and files with a clear path.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_patterns::path_clear;

pub fn rook_pattern(board: &Board, from: Square, to: Square) -> bool {
    if to.0 != from.0 && to.1 != from.1 {
        return false;
    }
    path_clear(board, from, to)
}
