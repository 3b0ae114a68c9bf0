//! Text rendering of engine output.

use tictactoe_core::{Cell, Snapshot, BOARD_SIZE};

use crate::protocol::{Output, HELP_TEXT};

/// Render the board grid. Empty cells show their position number and
/// winning cells are bracketed.
pub fn render_board(snapshot: &Snapshot) -> String {
    let winning = snapshot.status.winning_line();

    let rows: Vec<String> = snapshot
        .board
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let position = row * BOARD_SIZE + col;
                    let symbol = match cell {
                        Cell::Empty => position.to_string(),
                        Cell::Marked(mark) => mark.to_string(),
                    };
                    if winning.is_some_and(|line| line.contains(&position)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

/// Status lines shown under the board
pub fn render_status(snapshot: &Snapshot) -> String {
    format!(
        "Game: {}\nCurrent player: {}",
        snapshot.status, snapshot.current_player
    )
}

/// Render any output message for a terminal
pub fn render(output: &Output) -> String {
    match output {
        Output::Snapshot { snapshot } => {
            format!("{}\n\n{}", render_board(snapshot), render_status(snapshot))
        }
        Output::Rejected { reason } => format!("Move ignored: {}", reason),
        Output::Error { message } => format!("Error: {}", message),
        Output::Help => HELP_TEXT.to_string(),
        Output::Goodbye => "Goodbye!".to_string(),
    }
}
