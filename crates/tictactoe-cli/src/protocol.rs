//! Commands read from the player and messages written back.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tictactoe_core::{row_col_to_index, Position, RejectReason, Snapshot};

use crate::config::OutputMode;

/// Commands accepted from the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Command {
    /// Discard the current game and start over
    NewGame,

    /// Select a cell by its 0-based position
    SelectCell { position: Position },

    /// Show the list of commands
    Help,

    /// Leave the game
    Quit,
}

/// Messages written back to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Output {
    /// State after a new game or an applied move
    Snapshot { snapshot: Snapshot },

    /// The move was legal in form but not applied
    Rejected { reason: RejectReason },

    /// Input could not be used
    Error { message: String },

    /// List of commands
    Help,

    /// Session ended
    Goodbye,
}

/// Input that never made it to the engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command {0:?}, type 'help' for a list of commands")]
    UnknownCommand(String),

    #[error("{0:?} is not a cell number")]
    NotANumber(String),

    #[error("Row {row}, column {col} is off the board")]
    OffBoard { row: usize, col: usize },

    #[error("Invalid JSON command: {0}")]
    Json(String),
}

/// Parse one line of input in the given mode.
pub fn parse(line: &str, mode: OutputMode) -> Result<Command, InputError> {
    match mode {
        OutputMode::Text => parse_text(line),
        OutputMode::Json => {
            serde_json::from_str(line.trim()).map_err(|e| InputError::Json(e.to_string()))
        }
    }
}

/// Parse a typed command: a cell number, a `row col` pair, or a keyword.
pub fn parse_text(line: &str) -> Result<Command, InputError> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "n" | "new" => return Ok(Command::NewGame),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [cell] => Ok(Command::SelectCell {
            position: parse_number(cell)?,
        }),
        [row, col] => {
            let row = parse_number(row)?;
            let col = parse_number(col)?;
            let position = row_col_to_index(row, col).ok_or(InputError::OffBoard { row, col })?;
            Ok(Command::SelectCell { position })
        }
        _ => Err(InputError::UnknownCommand(line.clone())),
    }
}

fn parse_number(token: &str) -> Result<usize, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

pub const HELP_TEXT: &str = "\
Commands:
  0-8        place your mark in that cell (row by row from the top left)
  ROW COL    place your mark by 0-based row and column, e.g. '1 2'
  new, n     start a new game
  help, h    show this list
  quit, q    leave";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_cell_number() {
        assert_eq!(parse_text(" 4 "), Ok(Command::SelectCell { position: 4 }));
        // Range is checked by the engine
        assert_eq!(parse_text("12"), Ok(Command::SelectCell { position: 12 }));
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!(parse_text("1 2"), Ok(Command::SelectCell { position: 5 }));
        assert_eq!(
            parse_text("3 0"),
            Err(InputError::OffBoard { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_text("NEW"), Ok(Command::NewGame));
        assert_eq!(parse_text("q"), Ok(Command::Quit));
        assert_eq!(parse_text("?"), Ok(Command::Help));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            parse_text("-1"),
            Err(InputError::NotANumber("-1".to_string()))
        );
        assert_eq!(
            parse_text("a b c"),
            Err(InputError::UnknownCommand("a b c".to_string()))
        );
    }

    #[test]
    fn test_parse_json_commands() {
        assert_eq!(
            parse(r#"{"type":"SelectCell","payload":{"position":7}}"#, OutputMode::Json),
            Ok(Command::SelectCell { position: 7 })
        );
        assert_eq!(
            parse(r#"{"type":"NewGame"}"#, OutputMode::Json),
            Ok(Command::NewGame)
        );
        assert!(matches!(
            parse(r#"{"type":"SelectCell","payload":{"position":-3}}"#, OutputMode::Json),
            Err(InputError::Json(_))
        ));
    }

    #[test]
    fn test_rejected_output_json() {
        let output = Output::Rejected {
            reason: RejectReason::CellOccupied,
        };
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"type":"Rejected","payload":{"reason":"CellOccupied"}}"#
        );
    }
}
