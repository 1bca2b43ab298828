//! Piece valuations shared by the move selectors.

use crate::game_state::chess_types::PieceKind;

/// Numeric evaluation value. Floating point so fractional positional terms
/// and jitter combine cleanly.
pub type Score = f32;

/// Conventional material values. The king's value is large enough that any
/// line winning it dominates every positional term.
pub fn conventional_score(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 100.0,
    }
}
