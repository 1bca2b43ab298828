//! Selector abstraction so the session and the match harness can run any
//! strategy behind one interface.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::MoveDescription;

pub trait MoveSelector: Send {
    fn name(&self) -> &str;

    /// Pick a move for `side` on `board`. `None` means the side has no legal
    /// move at all; the caller decides what that implies for the game.
    fn choose_move(&mut self, board: &Board, side: Color) -> Option<MoveDescription>;
}
