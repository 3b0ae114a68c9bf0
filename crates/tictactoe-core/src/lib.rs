//! Tic-tac-toe rules engine
//!
//! This crate provides the core game logic, including:
//! - A nine-cell board addressed 0-8 in row-major order
//! - Turn order, with X always moving first
//! - Move validation and win/tie detection
//!
//! # Architecture
//!
//! The engine owns all game state and performs no I/O. A presentation layer
//! translates user input into cell positions, calls [`GameEngine::apply_move`]
//! and renders the returned [`Snapshot`]. It can be compiled to:
//! - Native Rust, driven by the terminal frontend
//! - WebAssembly for a browser frontend (`wasm` feature)
//!
//! # Modules
//!
//! - [`board`]: Marks, cells, the board and winning lines
//! - [`game`]: The game engine state machine
//! - [`actions`]: Records of applied moves

pub mod actions;
pub mod board;
pub mod game;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::MoveRecord;
pub use board::{
    index_to_row_col, row_col_to_index, Board, Cell, Mark, Position, BOARD_SIZE, CELL_COUNT,
    WINNING_LINES,
};
pub use game::{GameEngine, GameError, GameStatus, RejectReason, Snapshot};
