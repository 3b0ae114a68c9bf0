//! Moves made during a game.

use crate::board::{index_to_row_col, Mark, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A successfully applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Mark that was placed
    pub mark: Mark,
    /// Cell it was placed in
    pub position: Position,
}

impl MoveRecord {
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match index_to_row_col(self.position) {
            Some((row, col)) => write!(f, "{} at {} (r{}c{})", self.mark, self.position, row, col),
            None => write!(f, "{} at {}", self.mark, self.position),
        }
    }
}
