//! Head-to-head selector match harness for local testing.
//!
//! Runs two `MoveSelector` implementations against each other without any
//! interactive I/O, driving the same state machine the session uses.

use chrono::Local;

use crate::engines::engine_trait::MoveSelector;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::{GameState, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Hard cap on half-moves; without repetition or fifty-move rules a
    /// selector pair can otherwise shuffle forever.
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub per_game: MatchConfig,
    /// Log one timestamped line per finished game.
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={}",
            self.games, self.player1_wins, self.player2_wins, self.draws
        )
    }
}

/// Play one full game, `white` vs `black`. A selector returning `None`
/// forfeits on the spot.
pub fn play_match<'a>(
    white: &'a mut dyn MoveSelector,
    black: &'a mut dyn MoveSelector,
    config: &MatchConfig,
) -> MatchOutcome {
    let mut state = GameState::new_game();
    let mut plies = 0u16;

    while state.outcome.is_none() && plies < config.max_plies {
        let side = state.turn;
        let selector = match side {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        match selector.choose_move(&state.board, side) {
            Some(chosen) => {
                state.select_square(chosen.from);
                state.submit_destination(chosen.to);
                if state.pending_promotion.is_some() {
                    state.resolve_promotion(PieceKind::Queen);
                }
            }
            None => state.record_no_move_loss(side),
        }
        plies += 1;
    }

    match state.outcome {
        Some(Outcome::Checkmate {
            winner: Color::White,
        }) => MatchOutcome::WhiteWinCheckmate,
        Some(Outcome::Checkmate {
            winner: Color::Black,
        }) => MatchOutcome::BlackWinCheckmate,
        Some(Outcome::Stalemate) => MatchOutcome::DrawStalemate,
        None => MatchOutcome::DrawMaxPlies,
    }
}

/// Play a series, alternating colors between games so neither selector keeps
/// the first-move advantage.
pub fn play_match_series(
    player1: impl Fn() -> Box<dyn MoveSelector>,
    player2: impl Fn() -> Box<dyn MoveSelector>,
    config: &MatchSeriesConfig,
) -> MatchSeriesStats {
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for game_index in 0..config.games {
        let player1_is_white = game_index % 2 == 0;
        let mut first = player1();
        let mut second = player2();

        let outcome = if player1_is_white {
            play_match(first.as_mut(), second.as_mut(), &config.per_game)
        } else {
            play_match(second.as_mut(), first.as_mut(), &config.per_game)
        };

        match outcome {
            MatchOutcome::WhiteWinCheckmate => {
                if player1_is_white {
                    stats.player1_wins += 1;
                } else {
                    stats.player2_wins += 1;
                }
            }
            MatchOutcome::BlackWinCheckmate => {
                if player1_is_white {
                    stats.player2_wins += 1;
                } else {
                    stats.player1_wins += 1;
                }
            }
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => stats.draws += 1,
        }

        if config.verbose {
            println!(
                "[{}] game {} ({} as white): {:?}",
                Local::now().format("%H:%M:%S%.3f"),
                game_index + 1,
                if player1_is_white {
                    first.name()
                } else {
                    second.name()
                },
                outcome
            );
        }
        stats.outcomes.push(outcome);
    }

    stats
}
