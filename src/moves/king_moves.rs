//! King movement pattern: one square in any direction. No castling.

use crate::game_state::chess_types::Square;

pub fn king_pattern(from: Square, to: Square) -> bool {
    (to.0 - from.0).abs() <= 1 && (to.1 - from.1).abs() <= 1
}
