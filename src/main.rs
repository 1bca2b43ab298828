//! Interactive terminal front-end for the chessx rules engine.
//!
//! Reads squares in algebraic coordinates ("e2" selects, "e4" moves),
//! renders the board after every change, and drives the versus-computer
//! session tick while the engine thinks.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use chessx::game_state::chess_types::{Color, PieceKind};
use chessx::game_state::game_state::Outcome;
use chessx::session::{GameMode, GameSession};
use chessx::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use chessx::utils::render_board::render_board;

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("chessx terminal chess");
    let Some(mode) = prompt_mode(&mut lines) else {
        return;
    };
    let mut session = GameSession::new(mode);

    loop {
        wait_for_engine(&mut session);
        println!("\n{}", render_board(&session.state.board));
        print_status(&session);

        if session.state.pending_promotion.is_some() {
            let Some(kind) = prompt_promotion(&mut lines) else {
                return;
            };
            session.resolve_promotion(kind);
            continue;
        }

        if session.state.outcome.is_some() {
            println!("commands: new, mode, quit");
        } else if session.state.selection.is_some() {
            print!("destination (or another of your squares): ");
        } else {
            print!("square to move: ");
        }
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            return;
        };
        match line.trim() {
            "" => continue,
            "quit" | "exit" => return,
            "new" => session.new_game(),
            "mode" => {
                let Some(mode) = prompt_mode(&mut lines) else {
                    return;
                };
                session = GameSession::new(mode);
            }
            text => match algebraic_to_square(text) {
                Ok(square) => {
                    if session.state.outcome.is_some() {
                        continue;
                    }
                    if session.state.selection.is_some() {
                        session.submit_destination(square);
                    } else {
                        session.select_square(square);
                        print_targets(&session);
                    }
                }
                Err(e) => println!("{e}"),
            },
        }
    }
}

fn prompt_mode(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<GameMode> {
    loop {
        print!("mode: 1) two players  2) vs computer: ");
        let _ = io::stdout().flush();
        let line = lines.next()?.ok()?;
        match line.trim() {
            "1" => return Some(GameMode::TwoPlayer),
            "2" => return Some(GameMode::VsComputer),
            "quit" | "exit" => return None,
            _ => println!("enter 1 or 2"),
        }
    }
}

fn prompt_promotion(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<PieceKind> {
    loop {
        print!("promote to q)ueen r)ook b)ishop k)night: ");
        let _ = io::stdout().flush();
        let line = lines.next()?.ok()?;
        match line.trim() {
            "q" => return Some(PieceKind::Queen),
            "r" => return Some(PieceKind::Rook),
            "b" => return Some(PieceKind::Bishop),
            "k" | "n" => return Some(PieceKind::Knight),
            _ => println!("enter q, r, b or n"),
        }
    }
}

fn wait_for_engine(session: &mut GameSession) {
    if !session.is_thinking() {
        return;
    }
    print!("thinking");
    let _ = io::stdout().flush();
    while session.is_thinking() {
        if session.tick() {
            break;
        }
        print!(".");
        let _ = io::stdout().flush();
        thread::sleep(Duration::from_millis(50));
    }
    println!();
}

fn print_status(session: &GameSession) {
    match session.state.outcome {
        Some(Outcome::Checkmate { winner }) => {
            println!("checkmate! {} wins", color_name(winner));
            return;
        }
        Some(Outcome::Stalemate) => {
            println!("stalemate, game is a draw");
            return;
        }
        None => {}
    }

    let check = if session.state.in_check { " (check!)" } else { "" };
    println!("turn: {}{}", color_name(session.state.turn), check);

    for side in [Color::White, Color::Black] {
        let taken = session.state.captured.taken_by(side);
        if !taken.is_empty() {
            let kinds: Vec<&str> = taken.iter().map(|p| kind_name(p.kind)).collect();
            println!("captured by {}: {}", color_name(side), kinds.join(", "));
        }
    }
}

fn print_targets(session: &GameSession) {
    let Some(selection) = session.state.selection else {
        println!("no piece of yours there");
        return;
    };
    let targets: Vec<String> = session
        .state
        .legal_targets
        .iter()
        .filter_map(|&square| square_to_algebraic(square).ok())
        .collect();
    match square_to_algebraic(selection) {
        Ok(text) if targets.is_empty() => println!("{text} has no legal moves"),
        Ok(text) => println!("{text} can reach: {}", targets.join(" ")),
        Err(_) => {}
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn kind_name(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => "pawn",
        PieceKind::Knight => "knight",
        PieceKind::Bishop => "bishop",
        PieceKind::Rook => "rook",
        PieceKind::Queen => "queen",
        PieceKind::King => "king",
    }
}
