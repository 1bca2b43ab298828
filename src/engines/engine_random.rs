//! Uniform random selector.
//!
//! Picks uniformly from legal moves; used as a harness baseline and for
//! low-strength play.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::MoveSelector;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::moves::move_descriptions::MoveDescription;

pub struct RandomSelector {
    generator: LegalMoveGenerator,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            generator: LegalMoveGenerator::new(),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn name(&self) -> &str {
        "chessx random"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> Option<MoveDescription> {
        let candidates = self.generator.all_moves(board, side);
        let mut rng = rand::rng();
        candidates.as_slice().choose(&mut rng).copied()
    }
}
