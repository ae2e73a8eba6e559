//! Exhaustive checks of outcome evaluation against the line table.

use std::collections::HashSet;
use tictactoe_duel::{Board, GameMode, GameSession, LINES, Mark, Outcome, Square, evaluate_outcome};

/// Every assignment of Empty/X/O to the nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Mark::X),
                _ => Square::Occupied(Mark::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

fn has_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(mark)))
}

#[test]
fn test_win_iff_line_complete() {
    for board in all_boards() {
        let outcome = evaluate_outcome(&board);
        if let Outcome::Won(mark) = outcome {
            assert!(has_line(&board, mark), "{:?}", board);
        }
        if !has_line(&board, Mark::X) && !has_line(&board, Mark::O) {
            assert!(outcome.winner().is_none(), "{:?}", board);
        } else {
            assert!(outcome.winner().is_some(), "{:?}", board);
        }
    }
}

#[test]
fn test_tie_iff_full_without_line() {
    for board in all_boards() {
        let full = board.squares().iter().all(|s| *s != Square::Empty);
        let no_line = !has_line(&board, Mark::X) && !has_line(&board, Mark::O);
        assert_eq!(evaluate_outcome(&board) == Outcome::Tie, full && no_line, "{:?}", board);
    }
}

#[test]
fn test_evaluation_idempotent() {
    for board in all_boards() {
        assert_eq!(evaluate_outcome(&board), evaluate_outcome(&board));
    }
}

#[test]
fn test_legal_play_never_yields_both_winners() {
    let mut seen = HashSet::new();
    let mut stack = vec![GameSession::with_mode(GameMode::TwoPlayer)];

    while let Some(session) = stack.pop() {
        if !seen.insert(*session.board()) {
            continue;
        }
        let board = session.board();
        assert!(
            !(has_line(board, Mark::X) && has_line(board, Mark::O)),
            "{}",
            board.display()
        );
        if session.outcome().is_terminal() {
            continue;
        }
        for pos in tictactoe_duel::Position::valid_moves(board) {
            let mut next = session.clone();
            next.play_human(pos).expect("empty square in running game");
            stack.push(next);
        }
    }

    // Distinct positions reachable by legal play, terminal ones included.
    assert_eq!(seen.len(), 5478);
}
