//! Geometric movement legality, ignoring king safety.
//!
//! `pattern_legal` answers whether the piece on `from` could reach `to` given
//! current occupancy. King-safety filtering sits a layer above, in
//! `move_generation::legal_move_filter`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{on_board, PieceKind, Square};
use crate::moves::bishop_moves::bishop_pattern;
use crate::moves::king_moves::king_pattern;
use crate::moves::knight_moves::knight_pattern;
use crate::moves::pawn_moves::pawn_pattern;
use crate::moves::queen_moves::queen_pattern;
use crate::moves::rook_moves::rook_pattern;

/// Pattern-level legality for the piece on `from`. False when `from` is
/// empty, the destination holds a friendly piece, or the geometry does not
/// fit the piece kind.
pub fn pattern_legal(board: &Board, from: Square, to: Square) -> bool {
    if !on_board(from) || !on_board(to) || from == to {
        return false;
    }
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }
    match piece.kind {
        PieceKind::Pawn => pawn_pattern(board, piece.color, from, to),
        PieceKind::Knight => knight_pattern(from, to),
        PieceKind::Bishop => bishop_pattern(board, from, to),
        PieceKind::Rook => rook_pattern(board, from, to),
        PieceKind::Queen => queen_pattern(board, from, to),
        PieceKind::King => king_pattern(from, to),
    }
}

/// Every square strictly between `from` and `to` must be empty. Steps one
/// square at a time along the unit vector; callers guarantee the squares
/// share a rank, file, or diagonal.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.0 - from.0).signum();
    let d_col = (to.1 - from.1).signum();
    let mut current: Square = (from.0 + d_row, from.1 + d_col);
    while current != to {
        if board.piece_at(current).is_some() {
            return false;
        }
        current = (current.0 + d_row, current.1 + d_col);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece};

    fn piece(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    #[test]
    fn pawn_single_and_double_step() {
        let board = Board::standard_game();
        // e2 pawn.
        assert!(pattern_legal(&board, (6, 4), (5, 4)));
        assert!(pattern_legal(&board, (6, 4), (4, 4)));
        // Triple step and sideways are out.
        assert!(!pattern_legal(&board, (6, 4), (3, 4)));
        assert!(!pattern_legal(&board, (6, 4), (5, 5)));
    }

    #[test]
    fn pawn_double_step_blocked_by_either_square() {
        let mut board = Board::standard_game();
        board.place((5, 4), Some(piece(PieceKind::Knight, Color::Black)));
        assert!(!pattern_legal(&board, (6, 4), (4, 4)));

        let mut board = Board::standard_game();
        board.place((4, 4), Some(piece(PieceKind::Knight, Color::Black)));
        assert!(!pattern_legal(&board, (6, 4), (4, 4)));
        // The single step stays available when only the far square is taken.
        assert!(pattern_legal(&board, (6, 4), (5, 4)));
    }

    #[test]
    fn pawn_double_step_only_from_starting_rank() {
        let mut board = Board::empty();
        board.place((5, 4), Some(piece(PieceKind::Pawn, Color::White)));
        assert!(pattern_legal(&board, (5, 4), (4, 4)));
        assert!(!pattern_legal(&board, (5, 4), (3, 4)));
    }

    #[test]
    fn pawn_diagonal_is_capture_only() {
        let mut board = Board::empty();
        board.place((4, 4), Some(piece(PieceKind::Pawn, Color::White)));
        // Empty diagonal: no move.
        assert!(!pattern_legal(&board, (4, 4), (3, 3)));
        // Opposing piece on the diagonal: capture.
        board.place((3, 3), Some(piece(PieceKind::Knight, Color::Black)));
        assert!(pattern_legal(&board, (4, 4), (3, 3)));
        // Occupied straight ahead: blocked.
        board.place((3, 4), Some(piece(PieceKind::Knight, Color::Black)));
        assert!(!pattern_legal(&board, (4, 4), (3, 4)));
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let board = Board::standard_game();
        assert!(pattern_legal(&board, (7, 1), (5, 2)));
        assert!(pattern_legal(&board, (7, 1), (5, 0)));
        assert!(!pattern_legal(&board, (7, 1), (6, 1)));
    }

    #[test]
    fn sliders_respect_blocked_paths() {
        let board = Board::standard_game();
        // Rook a1 is boxed in.
        assert!(!pattern_legal(&board, (7, 0), (4, 0)));
        // Bishop c1 is boxed in.
        assert!(!pattern_legal(&board, (7, 2), (5, 4)));
        // Queen d1 sideways through own pieces.
        assert!(!pattern_legal(&board, (7, 3), (7, 0)));

        let mut open = Board::empty();
        open.place((7, 0), Some(piece(PieceKind::Rook, Color::White)));
        assert!(pattern_legal(&open, (7, 0), (0, 0)));
        open.place((4, 0), Some(piece(PieceKind::Pawn, Color::White)));
        assert!(!pattern_legal(&open, (7, 0), (0, 0)));
    }

    #[test]
    fn friendly_destination_is_rejected_for_every_kind() {
        let board = Board::standard_game();
        assert!(!pattern_legal(&board, (7, 0), (6, 0)));
        assert!(!pattern_legal(&board, (7, 4), (6, 4)));
        assert!(!pattern_legal(&board, (7, 1), (6, 3)));
    }

    #[test]
    fn queen_rejects_crooked_lines() {
        let mut board = Board::empty();
        board.place((4, 4), Some(piece(PieceKind::Queen, Color::White)));
        assert!(pattern_legal(&board, (4, 4), (4, 0)));
        assert!(pattern_legal(&board, (4, 4), (0, 0)));
        assert!(!pattern_legal(&board, (4, 4), (2, 5)));
    }
}
