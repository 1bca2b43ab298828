//! Single-ply heuristic selector.
//!
//! Scores every legal move by capture value, board centrality, and pawn
//! advance, plus a small random jitter so repeated games do not replay
//! identically. The jitter is bounded below the value of the cheapest
//! capture, so material always wins out.

use rand::Rng;
use rand::RngExt;

use crate::engines::engine_trait::MoveSelector;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::moves::move_descriptions::MoveDescription;
use crate::scoring::{conventional_score, Score};

pub struct HeuristicSelector {
    generator: LegalMoveGenerator,
}

impl HeuristicSelector {
    pub fn new() -> Self {
        Self {
            generator: LegalMoveGenerator::new(),
        }
    }

    /// Same as the trait method, with a caller-provided random source so
    /// tests can seed the jitter.
    pub fn choose_move_with<R: Rng + ?Sized>(
        &self,
        board: &Board,
        side: Color,
        rng: &mut R,
    ) -> Option<MoveDescription> {
        let mut best: Option<MoveDescription> = None;
        let mut best_score = Score::NEG_INFINITY;
        for candidate in self.generator.all_moves(board, side) {
            let score = evaluate_move(board, &candidate, rng);
            // Strict comparison keeps the earliest-enumerated move on ties.
            if score > best_score {
                best_score = score;
                best = Some(candidate);
            }
        }
        best
    }
}

impl Default for HeuristicSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for HeuristicSelector {
    fn name(&self) -> &str {
        "chessx heuristic"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> Option<MoveDescription> {
        let mut rng = rand::rng();
        self.choose_move_with(board, side, &mut rng)
    }
}

fn evaluate_move<R: Rng + ?Sized>(
    board: &Board,
    candidate: &MoveDescription,
    rng: &mut R,
) -> Score {
    let (to_row, to_col) = candidate.to;
    let mut score: Score = 0.0;

    if let Some(target) = board.piece_at(candidate.to) {
        score += conventional_score(target.kind) * 10.0;
    }

    let center_distance = (to_row as Score - 3.5).abs() + (to_col as Score - 3.5).abs();
    score += (7.0 - center_distance) * 0.5;

    if candidate.moving_piece.kind == PieceKind::Pawn {
        score += (7.0 - to_row as Score) * 0.3;
    }

    score + rng.random_range(0.0..2.0f32)
}
