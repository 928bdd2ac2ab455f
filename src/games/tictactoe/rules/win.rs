//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// Three positions that win when held by one player.
pub type Line = [Position; 3];

/// Every winning line: rows, then columns, then both diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn line_owner(board: &Board, [a, b, c]: Line) -> Option<Player> {
    let sq = board.get(a);
    if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
        sq.player()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Lists every complete line together with the player holding it.
pub fn winning_lines(board: &Board) -> Vec<(Line, Player)> {
    LINES
        .into_iter()
        .filter_map(|line| line_owner(board, line).map(|player| (line, player)))
        .collect()
}
