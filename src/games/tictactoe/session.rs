//! The game engine: one session of tic-tac-toe.

use super::action::{Move, MoveError, MoveOrigin};
use super::ai::select_ai_move;
use super::contracts::{Contract, GameNotOver, MoveContract, OriginMayMove};
use super::rules::evaluate_outcome;
use super::snapshot::Snapshot;
use super::{Board, GameMode, Mark, Outcome, Position, Square};
use tracing::{debug, info, instrument};

/// Board, turn, outcome and mode of the game being played.
///
/// All mutation goes through [`GameSession::apply_move`] and
/// [`GameSession::reset_session`]; each call either fully applies or leaves
/// the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(super) board: Board,
    pub(super) to_move: Mark,
    pub(super) outcome: Outcome,
    pub(super) mode: GameMode,
    pub(super) history: Vec<Move>,
}

impl GameSession {
    /// Creates a two-player session: empty board, X to move.
    pub fn new() -> Self {
        Self::with_mode(GameMode::default())
    }

    /// Creates a fresh session in the given mode.
    #[instrument]
    pub fn with_mode(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
            mode,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the outcome derived after the last move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True when a human may select a cell right now.
    ///
    /// Mirrors the input guard of the presentation layer: the game is still
    /// running and, in AI mode, X is to move.
    pub fn is_human_turn(&self) -> bool {
        !self.outcome.is_terminal() && (self.mode == GameMode::TwoPlayer || self.to_move == Mark::X)
    }

    /// True when the AI should play: AI mode, O to move, game running.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::VsAi && self.to_move == Mark::O && !self.outcome.is_terminal()
    }

    /// Places `mark` at `position`, flips the turn and re-derives the outcome.
    ///
    /// # Errors
    ///
    /// Rejects, leaving the session unchanged, when the game is over, the
    /// square is occupied, `mark` is not to move, or `origin` may not act in
    /// the current mode.
    #[instrument(skip(self), fields(mode = ?self.mode, to_move = %self.to_move))]
    pub fn apply_move(
        &mut self,
        position: Position,
        mark: Mark,
        origin: MoveOrigin,
    ) -> Result<Outcome, MoveError> {
        let action = Move::new(mark, position);

        if let Err(e) = MoveContract::pre(self, &(action, origin)) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        let mut next = self.clone();
        next.board.set(position, Square::Occupied(mark));
        next.history.push(action);
        next.to_move = mark.opponent();
        next.outcome = evaluate_outcome(&next.board);

        #[cfg(debug_assertions)]
        MoveContract::post(&next)?;

        *self = next;

        info!(%action, outcome = %self.outcome, "Move applied");
        Ok(self.outcome)
    }

    /// Index-based entry point for [`GameSession::apply_move`].
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] for an index outside 0-8, otherwise as
    /// [`GameSession::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move_at(
        &mut self,
        index: usize,
        mark: Mark,
        origin: MoveOrigin,
    ) -> Result<Outcome, MoveError> {
        let position = Position::from_index(index).ok_or_else(|| {
            debug!(index, "Move rejected: index out of range");
            MoveError::OutOfRange(index)
        })?;
        self.apply_move(position, mark, origin)
    }

    /// Plays a human cell selection with the mark currently to move.
    ///
    /// # Errors
    ///
    /// As [`GameSession::apply_move`]; in AI mode, [`MoveError::NotHumanTurn`]
    /// while O is to move.
    pub fn play_human(&mut self, position: Position) -> Result<Outcome, MoveError> {
        self.apply_move(position, self.to_move, MoveOrigin::Human)
    }

    /// Lets the AI pick and play O's move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] on a decided board, [`MoveError::AiInactive`] or
    /// [`MoveError::NotAiTurn`] when the AI may not act.
    #[instrument(skip(self))]
    pub fn play_ai(&mut self) -> Result<Position, MoveError> {
        GameNotOver::check(self)?;
        OriginMayMove::check(MoveOrigin::Ai, self)?;
        let position = select_ai_move(&self.board).ok_or(MoveError::NoMoveAvailable)?;
        self.apply_move(position, Mark::O, MoveOrigin::Ai)?;
        Ok(position)
    }

    /// Clears the board, gives X the move and resets the outcome.
    ///
    /// `Some(mode)` switches mode; `None` keeps the current one.
    #[instrument(skip(self), fields(current = ?self.mode))]
    pub fn reset_session(&mut self, mode: Option<GameMode>) {
        *self = Self::with_mode(mode.unwrap_or(self.mode));
        info!(mode = ?self.mode, "Session reset");
    }

    /// Switches between two-player and AI mode. Always resets the game.
    pub fn toggle_mode(&mut self) {
        self.reset_session(Some(self.mode.toggle()));
    }

    /// Captures everything a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
