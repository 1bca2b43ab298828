//! Standalone selector-vs-selector series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match`
//! `cargo run --release --bin engine_match -- --verbose`

use chessx::engines::engine_heuristic::HeuristicSelector;
use chessx::engines::engine_random::RandomSelector;
use chessx::engines::engine_trait::MoveSelector;
use chessx::utils::engine_match_harness::{play_match_series, MatchSeriesConfig};

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Customize these two lines to experiment with different selectors.
    let player1 = || Box::new(HeuristicSelector::new()) as Box<dyn MoveSelector>;
    let player2 = || Box::new(RandomSelector::new()) as Box<dyn MoveSelector>;

    let stats = play_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: 10,
            verbose,
            ..MatchSeriesConfig::default()
        },
    );

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
}
