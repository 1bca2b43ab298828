//! Full move legality: movement pattern plus king safety on a board clone.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_patterns::pattern_legal;

/// Filter configuration. The default enforces king safety; disabling it
/// yields the king-capture variant, where any pattern-legal move stands and
/// the game runs until a king is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalityFilter {
    pub enforce_king_safety: bool,
}

impl Default for LegalityFilter {
    fn default() -> Self {
        Self {
            enforce_king_safety: true,
        }
    }
}

impl LegalityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn king_capture_variant() -> Self {
        Self {
            enforce_king_safety: false,
        }
    }

    /// Pattern legality first, then a simulation on a board clone: relocate
    /// the piece, clear the origin, and reject the move when the mover's own
    /// king ends up attacked. Capture bookkeeping is skipped in the
    /// simulation; only occupancy matters for the attack scan.
    pub fn is_legal(&self, board: &Board, from: Square, to: Square) -> bool {
        if !pattern_legal(board, from, to) {
            return false;
        }
        if !self.enforce_king_safety {
            return true;
        }
        let Some(piece) = board.piece_at(from) else {
            return false;
        };
        let mut trial = board.clone();
        trial.relocate(from, to);
        !is_king_in_check(&trial, piece.color)
    }
}
