//! Tests for the one-ply AI heuristic.

use std::collections::HashSet;
use tictactoe_duel::{
    Board, GameMode, GameSession, Mark, Outcome, Position, evaluate_outcome, select_ai_move,
};

fn pick(board: &str) -> Option<usize> {
    select_ai_move(&board.parse::<Board>().unwrap()).map(Position::to_index)
}

#[test]
fn test_completes_own_row() {
    assert_eq!(pick("XX.OO...."), Some(5));
}

#[test]
fn test_blocks_opponent_row() {
    assert_eq!(pick("XX..O...."), Some(2));
}

#[test]
fn test_empty_board_takes_first_square() {
    assert_eq!(pick("........."), Some(0));
}

#[test]
fn test_full_board_has_no_move() {
    assert_eq!(pick("XOXXOOOXX"), None);
}

#[test]
fn test_fallback_ignores_center() {
    // Nothing to win or block: lowest empty index, even with the center free.
    assert_eq!(pick("X........"), Some(1));
}

#[test]
fn test_no_two_move_lookahead() {
    // No immediate threat on either board, so the lowest empty index wins out.
    assert_eq!(pick("X...O...X"), Some(1));
    assert_eq!(pick("X....O.X."), Some(1));
}

/// Every position reached with O to move in AI mode.
fn ai_turn_positions() -> Vec<GameSession> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    let mut stack = vec![GameSession::with_mode(GameMode::VsAi)];

    while let Some(session) = stack.pop() {
        if !seen.insert(*session.board()) || session.outcome().is_terminal() {
            continue;
        }
        if session.is_ai_turn() {
            found.push(session.clone());
        }
        for pos in Position::valid_moves(session.board()) {
            let mut next = session.clone();
            let mark = next.to_move();
            let origin = if mark == Mark::X {
                tictactoe_duel::MoveOrigin::Human
            } else {
                tictactoe_duel::MoveOrigin::Ai
            };
            next.apply_move(pos, mark, origin).expect("legal move");
            stack.push(next);
        }
    }
    found
}

fn winning_squares(board: &Board, mark: Mark) -> Vec<Position> {
    Position::valid_moves(board)
        .into_iter()
        .filter(|pos| {
            let mut squares = *board.squares();
            squares[pos.to_index()] = tictactoe_duel::Square::Occupied(mark);
            evaluate_outcome(&Board::from_squares(squares)) == Outcome::Won(mark)
        })
        .collect()
}

#[test]
fn test_heuristic_priorities_hold_everywhere() {
    let positions = ai_turn_positions();
    assert!(!positions.is_empty());

    for session in positions {
        let board = session.board();
        let choice = select_ai_move(board).expect("running game has an empty square");
        assert!(board.is_empty(choice));

        let wins = winning_squares(board, Mark::O);
        let blocks = winning_squares(board, Mark::X);
        let expected = wins
            .first()
            .or(blocks.first())
            .copied()
            .or_else(|| Position::valid_moves(board).first().copied());
        assert_eq!(Some(choice), expected, "{}", board.display());
    }
}

#[test]
fn test_ai_move_applies_as_o() {
    let mut session = GameSession::with_mode(GameMode::VsAi);
    session.play_human(Position::TopLeft).unwrap();
    session.play_human(Position::TopCenter).unwrap_err();

    let reply = session.play_ai().unwrap();
    assert_eq!(reply, Position::TopCenter);
    assert_eq!(session.board().get(reply), tictactoe_duel::Square::Occupied(Mark::O));
    assert_eq!(session.to_move(), Mark::X);
}
