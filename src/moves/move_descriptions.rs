//! Move payload shared by the enumerator, the selectors, and the session.

use crate::game_state::chess_types::{Piece, Square};

/// A candidate or applied transition. Capture and promotion are derived from
/// board state when the move is applied, not encoded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub from: Square,
    pub to: Square,
    pub moving_piece: Piece,
}
