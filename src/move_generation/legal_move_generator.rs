//! Legal move enumeration over squares and sides.
//!
//! Destinations and origins are visited in ascending row-then-column order;
//! selector tie-breaking depends on that order staying stable.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_filter::LegalityFilter;
use crate::moves::move_descriptions::MoveDescription;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegalMoveGenerator {
    pub filter: LegalityFilter,
}

impl LegalMoveGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: LegalityFilter) -> Self {
        Self { filter }
    }

    /// All destinations the piece on `from` may legally reach. Empty when
    /// `from` holds no piece.
    pub fn moves_for_square(&self, board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::new();
        if board.piece_at(from).is_none() {
            return moves;
        }
        for to in Board::squares() {
            if self.filter.is_legal(board, from, to) {
                moves.push(to);
            }
        }
        moves
    }

    /// Every legal move for `color`, in enumeration order.
    pub fn all_moves(&self, board: &Board, color: Color) -> Vec<MoveDescription> {
        let mut moves = Vec::new();
        for from in Board::squares() {
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            for to in self.moves_for_square(board, from) {
                moves.push(MoveDescription {
                    from,
                    to,
                    moving_piece: piece,
                });
            }
        }
        moves
    }

    /// Short-circuiting form of `!all_moves(..).is_empty()`; the terminal
    /// checks run this after every move, so bailing on the first hit matters.
    pub fn has_any_legal_move(&self, board: &Board, color: Color) -> bool {
        for from in Board::squares() {
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            for to in Board::squares() {
                if self.filter.is_legal(board, from, to) {
                    return true;
                }
            }
        }
        false
    }
}
