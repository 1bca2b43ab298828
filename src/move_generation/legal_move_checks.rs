//! King-safety primitives shared by the legality filter and the state
//! machine.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_patterns::pattern_legal;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// Scans every square of `attacker_color` for a piece whose movement pattern
/// reaches `square`. The pawn pattern's capture rule restricts pawn attacks
/// to diagonals on its own.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    for from in Board::squares() {
        if let Some(piece) = board.piece_at(from) {
            if piece.color == attacker_color && pattern_legal(board, from, square) {
                return true;
            }
        }
    }
    false
}

/// A side with no king on the board is treated as not in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn start_position_has_no_checks() {
        let board = Board::standard_game();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn check_matches_some_pattern_legal_attack_on_the_king() {
        let mut board = Board::empty();
        board.place(
            (7, 4),
            Some(Piece {
                kind: PieceKind::King,
                color: Color::White,
            }),
        );
        board.place(
            (0, 4),
            Some(Piece {
                kind: PieceKind::King,
                color: Color::Black,
            }),
        );
        board.place(
            (3, 4),
            Some(Piece {
                kind: PieceKind::Rook,
                color: Color::Black,
            }),
        );

        for color in [Color::White, Color::Black] {
            let king_sq = king_square(&board, color).expect("king should be present");
            let attacked_by_scan = Board::squares().any(|from| {
                board
                    .piece_at(from)
                    .map(|piece| piece.color == color.opposite())
                    .unwrap_or(false)
                    && pattern_legal(&board, from, king_sq)
            });
            assert_eq!(is_king_in_check(&board, color), attacked_by_scan);
        }
        assert!(is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));

        // Interpose a pawn and the file attack disappears.
        board.place(
            (5, 4),
            Some(Piece {
                kind: PieceKind::Pawn,
                color: Color::White,
            }),
        );
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let mut board = Board::empty();
        board.place(
            (4, 4),
            Some(Piece {
                kind: PieceKind::King,
                color: Color::White,
            }),
        );
        board.place(
            (3, 3),
            Some(Piece {
                kind: PieceKind::Pawn,
                color: Color::Black,
            }),
        );
        assert!(is_king_in_check(&board, Color::White));

        let mut board = Board::empty();
        board.place(
            (4, 4),
            Some(Piece {
                kind: PieceKind::King,
                color: Color::White,
            }),
        );
        board.place(
            (3, 4),
            Some(Piece {
                kind: PieceKind::Pawn,
                color: Color::Black,
            }),
        );
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = Board::empty();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }
}
