//! Game state: the move history and the position being viewed.

use super::error::{IllegalReason, MoveError};
use super::history::{History, move_label};
use super::outcome::GameOutcome;
use super::position::Position;
use super::rules::{self, WinningLine};
use super::types::{Board, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One row of the move list shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Human-readable label.
    pub label: String,
    /// Whether this is the snapshot currently displayed.
    pub is_current: bool,
}

/// Tic-tac-toe game with a rewindable history.
///
/// Only the snapshots and the current index are stored. Whose turn it is,
/// the outcome and the status text are recomputed from them on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_move: 0,
        }
    }

    /// Discards all history and returns to the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.history.snapshot_count() - 1, "Starting new game");
        *self = Self::new();
    }

    /// The board at the current history index.
    pub fn current_board(&self) -> &Board {
        // current_move < snapshot_count is maintained by every mutator
        &self.history.snapshots[self.current_move]
    }

    /// The current history index.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of snapshots in the history, including the starting board.
    pub fn snapshot_count(&self) -> usize {
        self.history.snapshot_count()
    }

    /// Whether X plays next from the current board.
    pub fn is_x_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The player who plays next from the current board.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> GameOutcome {
        rules::evaluate(self.current_board())
    }

    /// The completed line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.outcome().winning_line()
    }

    /// Status line for the current board.
    pub fn status_text(&self) -> String {
        match self.outcome() {
            GameOutcome::Win { player, .. } => format!("Winner: {}", player),
            GameOutcome::Draw => "It's a draw!".to_string(),
            GameOutcome::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// One entry per snapshot, labelled for the move list.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.snapshot_count())
            .map(|index| MoveEntry {
                index,
                label: move_label(index),
                is_current: index == self.current_move,
            })
            .collect()
    }

    /// Plays the next player's mark at cell index `cell` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if `cell` is not 0-8, the cell is
    /// occupied, or the current board is already won.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, cell: usize) -> Result<(), MoveError> {
        let Some(position) = Position::from_index(cell) else {
            debug!(cell, "Rejected move: no such cell");
            return Err(MoveError::IllegalMove {
                cell,
                reason: IllegalReason::NoSuchCell,
            });
        };
        self.play(position)
    }

    /// Plays the next player's mark at `position`.
    ///
    /// Snapshots after the current index are discarded before the new
    /// board is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if the cell is occupied or the
    /// current board is already won.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.next_player()))]
    pub fn play(&mut self, position: Position) -> Result<(), MoveError> {
        let board = self.current_board();

        if let Some(winner) = rules::evaluate(board).winner() {
            debug!(%winner, "Rejected move: game already decided");
            return Err(MoveError::IllegalMove {
                cell: position.index(),
                reason: IllegalReason::GameDecided(winner),
            });
        }

        if !board.is_empty(position) {
            debug!(%position, "Rejected move: cell occupied");
            return Err(MoveError::IllegalMove {
                cell: position.index(),
                reason: IllegalReason::Occupied(position),
            });
        }

        let player = self.next_player();
        let next = board.with_mark(position, player);
        self.history.record(self.current_move, next);
        self.current_move = self.history.snapshot_count() - 1;
        info!(%player, %position, current_move = self.current_move, "Move applied");

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(())
    }

    /// Moves the current index to `move_index` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if no snapshot has that index.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), MoveError> {
        let len = self.history.snapshot_count();
        if move_index >= len {
            debug!(len, "Rejected jump: out of range");
            return Err(MoveError::OutOfRange {
                requested: move_index,
                len,
            });
        }

        self.current_move = move_index;
        debug!(next = %self.next_player(), "Jumped");

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
