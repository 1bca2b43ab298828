//! 8×8 board model: piece storage plus the standard-game setup.
//!
//! The board is pure data. Indexing with an off-board square is a programming
//! error and panics; candidate coordinates are screened with `on_board`
//! before any lookup.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Default)]
pub struct Board {
    buffer: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard initial layout: Black on rows 0–1, White on rows 6–7.
    pub fn standard_game() -> Self {
        let mut board = Self::default();
        for col in 0..8i8 {
            board.place(
                (1, col),
                Some(Piece {
                    kind: PieceKind::Pawn,
                    color: Color::Black,
                }),
            );
            board.place(
                (6, col),
                Some(Piece {
                    kind: PieceKind::Pawn,
                    color: Color::White,
                }),
            );
        }
        board.setup_back_rank(0, Color::Black);
        board.setup_back_rank(7, Color::White);
        board
    }

    fn setup_back_rank(&mut self, row: i8, color: Color) {
        const ORDER: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in ORDER.iter().enumerate() {
            self.place(
                (row, col as i8),
                Some(Piece {
                    kind: *kind,
                    color,
                }),
            );
        }
    }

    /// Panics when `square` is off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.buffer[square.0 as usize][square.1 as usize]
    }

    /// Panics when `square` is off the board.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Option<Piece>) {
        self.buffer[square.0 as usize][square.1 as usize] = piece;
    }

    /// Moves whatever sits on `from` onto `to`, clearing the origin.
    /// Returns the piece previously occupying `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.piece_at(from);
        let displaced = self.piece_at(to);
        self.place(to, moving);
        self.place(from, None);
        displaced
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        for square in Self::squares() {
            if let Some(piece) = self.piece_at(square) {
                if piece.kind == PieceKind::King && piece.color == color {
                    return Some(square);
                }
            }
        }
        None
    }

    /// All 64 squares in ascending row-then-column order. Move enumeration
    /// and selector tie-breaking rely on this order staying stable.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|row| (0..8i8).map(move |col| (row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_game_layout() {
        let board = Board::standard_game();
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for col in 0..8i8 {
            let black_pawn = board.piece_at((1, col)).expect("black pawn expected");
            assert_eq!(black_pawn.kind, PieceKind::Pawn);
            assert_eq!(black_pawn.color, Color::Black);

            let white_pawn = board.piece_at((6, col)).expect("white pawn expected");
            assert_eq!(white_pawn.kind, PieceKind::Pawn);
            assert_eq!(white_pawn.color, Color::White);

            let black_piece = board.piece_at((0, col)).expect("black back rank expected");
            assert_eq!(black_piece.kind, BACK_RANK[col as usize]);
            assert_eq!(black_piece.color, Color::Black);

            let white_piece = board.piece_at((7, col)).expect("white back rank expected");
            assert_eq!(white_piece.kind, BACK_RANK[col as usize]);
            assert_eq!(white_piece.color, Color::White);
        }
        for row in 2..6i8 {
            for col in 0..8i8 {
                assert!(board.piece_at((row, col)).is_none());
            }
        }
    }

    #[test]
    fn relocate_returns_displaced_piece() {
        let mut board = Board::empty();
        let rook = Piece {
            kind: PieceKind::Rook,
            color: Color::White,
        };
        let pawn = Piece {
            kind: PieceKind::Pawn,
            color: Color::Black,
        };
        board.place((7, 0), Some(rook));
        board.place((3, 0), Some(pawn));

        let displaced = board.relocate((7, 0), (3, 0));
        assert_eq!(displaced, Some(pawn));
        assert_eq!(board.piece_at((3, 0)), Some(rook));
        assert!(board.piece_at((7, 0)).is_none());
    }

    #[test]
    fn find_king_reports_missing_king() {
        let board = Board::empty();
        assert!(board.find_king(Color::White).is_none());

        let board = Board::standard_game();
        assert_eq!(board.find_king(Color::White), Some((7, 4)));
        assert_eq!(board.find_king(Color::Black), Some((0, 4)));
    }
}
