//! A local game session: routes player commands to the engine.

use tictactoe_core::{GameEngine, GameError};
use tracing::{debug, warn};

use crate::protocol::{Command, InputError, Output};

/// One player-facing session holding a single engine.
pub struct Session {
    engine: GameEngine,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
        }
    }

    /// Start the first game
    pub fn start(&mut self) -> Output {
        Output::Snapshot {
            snapshot: self.engine.new_game(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Apply one command and describe the result.
    pub fn handle(&mut self, command: Command) -> Output {
        match command {
            Command::NewGame => Output::Snapshot {
                snapshot: self.engine.new_game(),
            },
            Command::SelectCell { position } => match self.engine.apply_move(position) {
                Ok(snapshot) => Output::Snapshot { snapshot },
                Err(GameError::MoveRejected(reason)) => {
                    debug!(position, %reason, "selection ignored");
                    Output::Rejected { reason }
                }
                Err(e @ GameError::InvalidPosition(_)) => Output::Error {
                    message: e.to_string(),
                },
            },
            Command::Help => Output::Help,
            Command::Quit => Output::Goodbye,
        }
    }

    /// Report input that could not be parsed
    pub fn reject_input(&self, error: InputError) -> Output {
        warn!(%error, "unusable input");
        Output::Error {
            message: error.to_string(),
        }
    }
}
