//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here knows about
//! history or turns; [`evaluate`] is total over every possible board,
//! including ones that cannot arise in play.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{NotAWinningLine, WinningLine, find_winning_line};

use super::{Board, GameOutcome};
use tracing::instrument;

/// Evaluates a board for a win, a draw, or a game still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((player, line)) = find_winning_line(board) {
        return GameOutcome::Win { player, line };
    }

    if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
