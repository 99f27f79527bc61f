//! Outcome of evaluating a board.

use super::rules::WinningLine;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// What a board snapshot says about the game.
///
/// Always derived from a board by [`crate::evaluate`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No completed line and at least one empty cell.
    InProgress,
    /// `player` holds every cell of `line`.
    Win {
        /// The winning player.
        player: Player,
        /// The first completed line found.
        line: WinningLine,
    },
    /// Full board with no completed line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameOutcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win { player, line } => write!(f, "Player {} wins on {}", player, line),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
