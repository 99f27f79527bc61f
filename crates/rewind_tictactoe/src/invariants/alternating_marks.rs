//! Alternating marks invariant: X places on even steps, O on odd ones.

use super::super::{Cell, GameState, Player};
use super::Invariant;

/// Invariant: every mark added between snapshot `k` and `k + 1` belongs to
/// the player whose turn it was at `k`.
///
/// This is what lets the next player be derived from the history index
/// alone.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(game: &GameState) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(k, w)| {
                let expected = Cell::Occupied(Player::for_move(k));
                w[0].cells()
                    .iter()
                    .zip(w[1].cells())
                    .filter(|(before, after)| before != after)
                    .all(|(_, after)| *after == expected)
            })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X... along the history"
    }
}
