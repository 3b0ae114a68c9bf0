//! Core game state machine.
//!
//! This module contains the `GameEngine` struct, which owns the board and
//! turn order, validates moves and detects wins and ties.

use crate::actions::MoveRecord;
use crate::board::{Board, Mark, Position, CELL_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Outcome of the game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted
    InProgress,
    /// A line was completed
    Won {
        winner: Mark,
        /// The three positions forming the completed line
        line: [Position; 3],
    },
    /// The board filled with no completed line
    Tied,
}

impl GameStatus {
    /// Evaluate a board: a completed line wins, otherwise a full board ties.
    pub fn evaluate(board: &Board) -> Self {
        if let Some((winner, line)) = board.winning_line() {
            GameStatus::Won { winner, line }
        } else if board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// Whether this status is terminal
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "Playing"),
            GameStatus::Won { winner, .. } => write!(f, "{} wins", winner),
            GameStatus::Tied => write!(f, "Tie"),
        }
    }
}

/// Why a well-formed move was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The game has already been won or tied
    GameOver,
    /// The target cell already holds a mark
    CellOccupied,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::GameOver => write!(f, "game is over"),
            RejectReason::CellOccupied => write!(f, "cell is occupied"),
        }
    }
}

/// Errors that can occur when applying a move.
///
/// Neither variant leaves the engine in a changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid position {0}: must be between 0 and 8")]
    InvalidPosition(Position),

    #[error("Move rejected: {0}")]
    MoveRejected(RejectReason),
}

/// The externally observable state after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All nine cells
    pub board: Board,
    /// Whose turn it is. Once the game is over this is the player who moved last.
    pub current_player: Mark,
    /// Current outcome
    pub status: GameStatus,
}

/// A single game of tic-tac-toe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    /// First entry is the player to move
    players: [Mark; 2],
    game_over: bool,
    status: GameStatus,
    /// Moves applied in the current game
    history: Vec<MoveRecord>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine with a fresh game ready to play
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [Mark::X, Mark::O],
            game_over: false,
            status: GameStatus::InProgress,
            history: Vec::with_capacity(CELL_COUNT),
        }
    }

    /// Discard the current game and start a new one. X always moves first.
    pub fn new_game(&mut self) -> Snapshot {
        *self = Self::new();
        info!("new game started");
        self.snapshot()
    }

    /// Place the current player's mark at `position`.
    ///
    /// Out-of-range positions fail with [`GameError::InvalidPosition`].
    /// Moves after the game ended, or onto an occupied cell, fail with
    /// [`GameError::MoveRejected`]. In every failure case the state is
    /// left untouched.
    pub fn apply_move(&mut self, position: Position) -> Result<Snapshot, GameError> {
        if position >= CELL_COUNT {
            warn!(position, "move to out-of-range position");
            return Err(GameError::InvalidPosition(position));
        }

        if self.game_over {
            debug!(position, "move rejected: game is over");
            return Err(GameError::MoveRejected(RejectReason::GameOver));
        }

        if !self.board.cells()[position].is_empty() {
            debug!(position, "move rejected: cell is occupied");
            return Err(GameError::MoveRejected(RejectReason::CellOccupied));
        }

        let mark = self.players[0];
        self.board.set(position, mark);
        self.history.push(MoveRecord::new(mark, position));
        debug!(%mark, position, board = %self.board, "mark placed");

        self.status = GameStatus::evaluate(&self.board);
        match self.status {
            GameStatus::InProgress => self.players.swap(0, 1),
            GameStatus::Won { winner, line } => {
                self.game_over = true;
                info!(%winner, ?line, "game won");
            }
            GameStatus::Tied => {
                self.game_over = true;
                info!("game tied");
            }
        }

        Ok(self.snapshot())
    }

    /// Current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            current_player: self.current_player(),
            status: self.status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move (or who moved last, once finished)
    pub fn current_player(&self) -> Mark {
        self.players[0]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        self.game_over
    }

    /// Get the winner if the game was won
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Positions where the current player may move; empty once finished
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.game_over {
            Vec::new()
        } else {
            self.board.empty_positions()
        }
    }

    /// Number of moves applied in this game
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Moves applied in this game, oldest first
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use pretty_assertions::assert_eq;

    fn play(engine: &mut GameEngine, moves: &[Position]) -> Snapshot {
        let mut last = engine.snapshot();
        for &pos in moves {
            last = engine.apply_move(pos).unwrap();
        }
        last
    }

    #[test]
    fn test_new_game_state() {
        let mut engine = GameEngine::new();
        let snapshot = engine.new_game();

        assert_eq!(snapshot.board, Board::new());
        assert_eq!(snapshot.current_player, Mark::X);
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert!(!engine.is_finished());
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_move_places_mark_and_rotates() {
        let mut engine = GameEngine::new();
        let snapshot = engine.apply_move(4).unwrap();

        assert_eq!(snapshot.board.get(4), Some(Cell::Marked(Mark::X)));
        assert_eq!(snapshot.current_player, Mark::O);
        assert_eq!(engine.last_move(), Some(MoveRecord::new(Mark::X, 4)));

        let snapshot = engine.apply_move(0).unwrap();
        assert_eq!(snapshot.board.get(0), Some(Cell::Marked(Mark::O)));
        assert_eq!(snapshot.current_player, Mark::X);
        assert_eq!(engine.move_count(), 2);
    }

    #[test]
    fn test_invalid_position_leaves_state_untouched() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).unwrap();
        let before = engine.snapshot();

        assert_eq!(engine.apply_move(9), Err(GameError::InvalidPosition(9)));
        assert_eq!(
            engine.apply_move(usize::MAX),
            Err(GameError::InvalidPosition(usize::MAX))
        );
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).unwrap();
        let before = engine.snapshot();

        assert_eq!(
            engine.apply_move(0),
            Err(GameError::MoveRejected(RejectReason::CellOccupied))
        );
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.current_player(), Mark::O);
    }

    #[test]
    fn test_win_stops_rotation_and_rejects_moves() {
        let mut engine = GameEngine::new();
        let snapshot = play(&mut engine, &[0, 3, 1, 4, 2]);

        assert_eq!(
            snapshot.status,
            GameStatus::Won {
                winner: Mark::X,
                line: [0, 1, 2]
            }
        );
        assert_eq!(snapshot.current_player, Mark::X);
        assert!(engine.is_finished());
        assert_eq!(engine.winner(), Some(Mark::X));
        assert!(engine.valid_moves().is_empty());

        let before = engine.snapshot();
        assert_eq!(
            engine.apply_move(8),
            Err(GameError::MoveRejected(RejectReason::GameOver))
        );
        // Game over takes precedence over an occupied cell
        assert_eq!(
            engine.apply_move(0),
            Err(GameError::MoveRejected(RejectReason::GameOver))
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);

        let snapshot = engine.new_game();
        assert_eq!(snapshot, GameEngine::new().snapshot());
        assert!(engine.history().is_empty());
        assert!(engine.apply_move(0).is_ok());
    }

    #[test]
    fn test_evaluate_tie() {
        let mut engine = GameEngine::new();
        let snapshot = play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(snapshot.status, GameStatus::Tied);
        assert_eq!(snapshot.status.winning_line(), None);
        assert_eq!(GameStatus::evaluate(&snapshot.board), GameStatus::Tied);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::InProgress.to_string(), "Playing");
        assert_eq!(GameStatus::Tied.to_string(), "Tie");
        let won = GameStatus::Won {
            winner: Mark::O,
            line: [2, 4, 6],
        };
        assert_eq!(won.to_string(), "O wins");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::InvalidPosition(12).to_string(),
            "Invalid position 12: must be between 0 and 8"
        );
        assert_eq!(
            GameError::MoveRejected(RejectReason::CellOccupied).to_string(),
            "Move rejected: cell is occupied"
        );
    }
}
