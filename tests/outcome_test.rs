//! Tests for board outcome classification.

use tictactoe_minimax::{Board, LINES, Outcome, Player, Position, evaluate};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_every_line_wins_for_either_mark() {
    for player in [Player::X, Player::O] {
        for line in LINES {
            let b = line
                .into_iter()
                .fold(Board::new(), |b, pos| b.with(pos, player));
            assert_eq!(evaluate(&b), Outcome::WonBy(player), "{line:?}");
        }
    }
}

#[test]
fn test_win_with_opponent_marks_elsewhere() {
    // X X X / O O . / . . .
    assert_eq!(evaluate(&board("XXXOO....")), Outcome::WonBy(Player::X));
    // X . O / X O . / O . X
    assert_eq!(evaluate(&board("X.OXO.O.X")), Outcome::WonBy(Player::O));
}

#[test]
fn test_full_board_without_line_is_tie() {
    // X O X / X O O / O X X
    assert_eq!(evaluate(&board("XOXXOOOXX")), Outcome::Tie);
    // X O X / O X X / O X O
    assert_eq!(evaluate(&board("XOXOXXOXO")), Outcome::Tie);
}

#[test]
fn test_open_board_without_line_is_undecided() {
    assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    assert_eq!(evaluate(&board("XX.O.....")), Outcome::Undecided);
    // One square short of a tie.
    assert_eq!(evaluate(&board("XOXXOOOX.")), Outcome::Undecided);
}

#[test]
fn test_first_line_in_order_decides() {
    // Two X lines (top row and left column): the row is checked first,
    // but both name the same winner.
    let b = board("XXXX..X..");
    assert_eq!(evaluate(&b), Outcome::WonBy(Player::X));
}

#[test]
fn test_evaluate_is_pure() {
    let b = board("XO.XO....");
    let before = b;
    let first = evaluate(&b);
    let second = evaluate(&b);
    assert_eq!(first, second);
    assert_eq!(b, before);
    assert!(b.is_empty(Position::TopRight));
}
