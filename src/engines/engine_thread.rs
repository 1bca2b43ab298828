//! Background "thinking" driver for the automated side.
//!
//! The worker thread owns a selector, sleeps for the configured delay to
//! simulate thinking, and answers over mpsc channels. Every response carries
//! the epoch of the request that produced it, so the session can discard
//! results that arrive after a reset or turn change instead of applying
//! stale state.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::engines::engine_trait::MoveSelector;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::MoveDescription;

enum EngineCommand {
    Think {
        board: Board,
        side: Color,
        epoch: u64,
    },
    Quit,
}

#[derive(Debug, Clone, Copy)]
pub struct EngineResponse {
    pub epoch: u64,
    pub chosen: Option<MoveDescription>,
}

pub struct EngineThread {
    command_sender: mpsc::Sender<EngineCommand>,
    response_receiver: mpsc::Receiver<EngineResponse>,
    handle: Option<thread::JoinHandle<()>>,
}

impl EngineThread {
    pub fn spawn(mut selector: Box<dyn MoveSelector>, thinking_delay: Duration) -> Self {
        let (command_sender, command_receiver) = mpsc::channel();
        let (response_sender, response_receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            while let Ok(command) = command_receiver.recv() {
                match command {
                    EngineCommand::Think { board, side, epoch } => {
                        thread::sleep(thinking_delay);
                        let chosen = selector.choose_move(&board, side);
                        if response_sender.send(EngineResponse { epoch, chosen }).is_err() {
                            break;
                        }
                    }
                    EngineCommand::Quit => break,
                }
            }
        });

        Self {
            command_sender,
            response_receiver,
            handle: Some(handle),
        }
    }

    /// Hands the worker a snapshot of the position. The live state is never
    /// shared with the thread.
    pub fn request_move(&self, board: &Board, side: Color, epoch: u64) {
        let _ = self.command_sender.send(EngineCommand::Think {
            board: board.clone(),
            side,
            epoch,
        });
    }

    /// Non-blocking poll for a finished computation.
    pub fn poll_response(&self) -> Option<EngineResponse> {
        self.response_receiver.try_recv().ok()
    }
}

impl Drop for EngineThread {
    fn drop(&mut self) {
        let _ = self.command_sender.send(EngineCommand::Quit);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
