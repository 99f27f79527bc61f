//! Errors returned by game operations.

use super::position::Position;
use super::types::Player;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalReason {
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The displayed board already has a winner.
    #[display("player {} has already won", _0)]
    GameDecided(Player),

    /// The index does not name a cell (must be 0-8).
    #[display("no such cell")]
    NoSuchCell,
}

/// Error that can occur when applying a move or jumping through history.
///
/// State is never modified when an error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move cannot be played on the current board.
    #[display("Illegal move at cell {}: {}", cell, reason)]
    IllegalMove {
        /// Requested cell index.
        cell: usize,
        /// Why the move was refused.
        reason: IllegalReason,
    },

    /// The requested history index does not exist.
    #[display("Move {} is out of range (history holds {} snapshots)", requested, len)]
    OutOfRange {
        /// Requested history index.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for MoveError {}
