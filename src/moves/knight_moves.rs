//! Knight movement pattern. Knights jump; occupancy between the squares is
//! irrelevant.

use crate::game_state::chess_types::Square;

pub fn knight_pattern(from: Square, to: Square) -> bool {
    let d_row = (to.0 - from.0).abs();
    let d_col = (to.1 - from.1).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}
