//! Presentation-facing session: game mode, the inbound call surface, and the
//! automated side's turn handling.
//!
//! The session owns the `GameState` and, in versus-computer mode, an engine
//! thread. Human input is ignored while the computer is thinking. The moment
//! a state change makes it the automated side's turn, the session issues a
//! think request; that request is the explicit "computer to move" event;
//! nothing is inferred from field changes.

use std::time::Duration;

use crate::engines::engine_heuristic::HeuristicSelector;
use crate::engines::engine_thread::EngineThread;
use crate::engines::engine_trait::MoveSelector;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;

pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    VsComputer,
}

pub struct GameSession {
    pub state: GameState,
    mode: GameMode,
    automated_side: Color,
    engine: Option<EngineThread>,
    epoch: u64,
    thinking: bool,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self::with_thinking_delay(mode, DEFAULT_THINKING_DELAY)
    }

    pub fn with_thinking_delay(mode: GameMode, thinking_delay: Duration) -> Self {
        Self::with_selector(mode, Box::new(HeuristicSelector::new()), thinking_delay)
    }

    /// The computer plays Black with the given selector; in two-player mode
    /// the selector is unused and no thread is spawned.
    pub fn with_selector(
        mode: GameMode,
        selector: Box<dyn MoveSelector>,
        thinking_delay: Duration,
    ) -> Self {
        let engine = match mode {
            GameMode::TwoPlayer => None,
            GameMode::VsComputer => Some(EngineThread::spawn(selector, thinking_delay)),
        };
        Self {
            state: GameState::new_game(),
            mode,
            automated_side: Color::Black,
            engine,
            epoch: 0,
            thinking: false,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// Discards the running game and starts over. Bumping the epoch strands
    /// any in-flight computation, so a late answer for the old game is
    /// never applied.
    pub fn new_game(&mut self) {
        self.state = GameState::new_game();
        self.epoch += 1;
        self.thinking = false;
        self.request_automated_move_if_due();
    }

    pub fn select_square(&mut self, square: Square) {
        if self.human_input_blocked() {
            return;
        }
        self.state.select_square(square);
    }

    pub fn submit_destination(&mut self, square: Square) {
        if self.human_input_blocked() {
            return;
        }
        self.state.submit_destination(square);
        self.request_automated_move_if_due();
    }

    pub fn resolve_promotion(&mut self, kind: PieceKind) {
        if self.human_input_blocked() {
            return;
        }
        self.state.resolve_promotion(kind);
        self.request_automated_move_if_due();
    }

    /// Polls the engine thread and applies a finished computation. Returns
    /// true when a move (or a no-move loss) was applied this call.
    pub fn tick(&mut self) -> bool {
        let Some(engine) = &self.engine else {
            return false;
        };
        let Some(response) = engine.poll_response() else {
            return false;
        };
        if response.epoch != self.epoch || !self.thinking {
            // Stale: the game was reset while the engine thought.
            return false;
        }
        self.thinking = false;
        match response.chosen {
            Some(chosen) => {
                self.state.select_square(chosen.from);
                self.state.submit_destination(chosen.to);
                // The computer never opens the promotion dialog.
                if self.state.pending_promotion.is_some() {
                    self.state.resolve_promotion(PieceKind::Queen);
                }
            }
            None => self.state.record_no_move_loss(self.automated_side),
        }
        true
    }

    fn human_input_blocked(&self) -> bool {
        self.thinking
            || (self.mode == GameMode::VsComputer && self.state.turn == self.automated_side)
    }

    fn request_automated_move_if_due(&mut self) {
        if self.mode != GameMode::VsComputer || self.thinking {
            return;
        }
        if self.state.outcome.is_some() || self.state.pending_promotion.is_some() {
            return;
        }
        if self.state.turn != self.automated_side {
            return;
        }
        if let Some(engine) = &self.engine {
            self.epoch += 1;
            engine.request_move(&self.state.board, self.automated_side, self.epoch);
            self.thinking = true;
        }
    }
}
