//! Conversions between "e4"-style coordinates and board squares.
//!
//! `a8` maps to `(0, 0)` and `h1` to `(7, 7)`: the row index counts down
//! from Black's back rank, the column up from the a-file.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{on_board, Square};

/// Convert algebraic notation (for example "e4") to a `(row, col)` square.
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicString(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicChar(rank as char));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok((row, col))
}

/// Convert a `(row, col)` square to algebraic notation.
pub fn square_to_algebraic(square: Square) -> Result<String, ChessError> {
    if !on_board(square) {
        return Err(ChessError::InvalidAlgebraicString(format!("{square:?}")));
    }
    let file = char::from(b'a' + square.1 as u8);
    let rank = char::from(b'8' - square.0 as u8);
    Ok(format!("{file}{rank}"))
}
