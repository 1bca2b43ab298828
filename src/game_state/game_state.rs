//! Game state machine: turn order, selection, promotion, capture records,
//! and terminal outcome.
//!
//! `GameState` is the single owner of a running game. Presentation code calls
//! `select_square`/`submit_destination`/`resolve_promotion` and reads the
//! public fields back after every call; input that does not fit the current
//! state is ignored without an error.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_filter::LegalityFilter;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;

/// Terminal result of a game. Set exactly once; no further moves are
/// accepted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// Pieces removed from the board, per capturing side, in capture order.
/// Append-only; used for display.
#[derive(Debug, Clone, Default)]
pub struct CapturedPieces {
    by_white: Vec<Piece>,
    by_black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn record(&mut self, capturing_side: Color, piece: Piece) {
        match capturing_side {
            Color::White => self.by_white.push(piece),
            Color::Black => self.by_black.push(piece),
        }
    }

    pub fn taken_by(&self, side: Color) -> &[Piece] {
        match side {
            Color::White => &self.by_white,
            Color::Black => &self.by_black,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    /// Origin square awaiting a destination, human flow only.
    pub selection: Option<Square>,
    /// Legal destinations of the current selection, in enumeration order.
    pub legal_targets: Vec<Square>,
    /// Square of a pawn that reached the far rank and awaits its new kind.
    /// While set, only `resolve_promotion` is accepted.
    pub pending_promotion: Option<Square>,
    /// Whether the side facing the next move is in check. On a checkmate
    /// outcome this stays true for the defeated side.
    pub in_check: bool,
    pub outcome: Option<Outcome>,
    pub captured: CapturedPieces,
    generator: LegalMoveGenerator,
}

impl GameState {
    pub fn new_game() -> Self {
        Self::new_game_with_filter(LegalityFilter::new())
    }

    /// Fresh game under a specific legality filter, e.g. the king-capture
    /// variant.
    pub fn new_game_with_filter(filter: LegalityFilter) -> Self {
        Self {
            board: Board::standard_game(),
            turn: Color::White,
            selection: None,
            legal_targets: Vec::new(),
            pending_promotion: None,
            in_check: false,
            outcome: None,
            captured: CapturedPieces::default(),
            generator: LegalMoveGenerator::with_filter(filter),
        }
    }

    #[inline]
    fn accepts_move_input(&self) -> bool {
        self.outcome.is_none() && self.pending_promotion.is_none()
    }

    /// Selects `square` when it holds a piece of the side to move and
    /// publishes its legal targets. Anything else is ignored.
    pub fn select_square(&mut self, square: Square) {
        if !self.accepts_move_input() {
            return;
        }
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.turn => {
                self.legal_targets = self.generator.moves_for_square(&self.board, square);
                self.selection = Some(square);
            }
            _ => {}
        }
    }

    /// Applies the move when `square` is a published target. A different
    /// square holding the mover's own piece reselects; anything else clears
    /// the selection.
    pub fn submit_destination(&mut self, square: Square) {
        if !self.accepts_move_input() {
            return;
        }
        let Some(selected) = self.selection else {
            return;
        };
        if self.legal_targets.contains(&square) {
            self.apply_move(selected, square);
            return;
        }
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.turn => {
                self.legal_targets = self.generator.moves_for_square(&self.board, square);
                self.selection = Some(square);
            }
            _ => {
                self.selection = None;
                self.legal_targets.clear();
            }
        }
    }

    fn apply_move(&mut self, from: Square, to: Square) {
        if let Some(captured) = self.board.relocate(from, to) {
            self.captured.record(self.turn, captured);
        }
        self.selection = None;
        self.legal_targets.clear();

        let reached_far_rank = matches!(
            self.board.piece_at(to),
            Some(piece) if piece.kind == PieceKind::Pawn && to.0 == piece.color.promotion_row()
        );
        if reached_far_rank {
            // Turn advance and status checks wait for the promotion choice.
            self.pending_promotion = Some(to);
            return;
        }
        self.advance_turn();
    }

    /// Replaces the promoted pawn with `kind` and resumes the deferred turn
    /// advance. Pawn and king are not promotion choices and are ignored.
    pub fn resolve_promotion(&mut self, kind: PieceKind) {
        if self.outcome.is_some() {
            return;
        }
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return;
        }
        let Some(square) = self.pending_promotion else {
            return;
        };
        if let Some(pawn) = self.board.piece_at(square) {
            self.board.place(
                square,
                Some(Piece {
                    kind,
                    color: pawn.color,
                }),
            );
        }
        self.pending_promotion = None;
        self.advance_turn();
    }

    /// Resolves a side having no move outside the normal turn flow: the
    /// opponent wins regardless of check status. Used when the automated
    /// side comes up empty.
    pub fn record_no_move_loss(&mut self, side: Color) {
        if self.outcome.is_some() {
            return;
        }
        self.outcome = Some(Outcome::Checkmate {
            winner: side.opposite(),
        });
    }

    fn advance_turn(&mut self) {
        let next = self.turn.opposite();
        self.in_check = is_king_in_check(&self.board, next);
        if !self.generator.has_any_legal_move(&self.board, next) {
            self.outcome = Some(if self.in_check {
                Outcome::Checkmate { winner: self.turn }
            } else {
                Outcome::Stalemate
            });
            return;
        }
        self.turn = next;
    }
}
