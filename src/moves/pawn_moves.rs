//! Pawn movement pattern: forward pushes and diagonal captures.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Forward single step onto an empty square, double step from the starting
/// rank when both squares ahead are empty, or a diagonal single step onto an
/// occupied square. The dispatcher has already ruled out friendly targets,
/// so an occupied destination here is always a capture.
pub fn pawn_pattern(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let direction = color.pawn_direction();
    let d_row = to.0 - from.0;
    let d_col = to.1 - from.1;
    let target = board.piece_at(to);

    if d_col == 0 && target.is_none() {
        if d_row == direction {
            return true;
        }
        if from.0 == color.pawn_start_row()
            && d_row == 2 * direction
            && board.piece_at((from.0 + direction, from.1)).is_none()
        {
            return true;
        }
    }
    d_col.abs() == 1 && d_row == direction && target.is_some()
}
