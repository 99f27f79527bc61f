//! Single-step invariant: each snapshot adds exactly one mark to the previous one.

use super::super::{Board, Cell, GameState};
use super::Invariant;

/// Invariant: the history starts empty and grows one mark at a time.
///
/// Snapshot 0 is the empty board. Snapshot `k + 1` differs from snapshot
/// `k` in exactly one cell, and that cell was empty in snapshot `k`.
pub struct SingleStepHistory;

fn is_single_step(before: &Board, after: &Board) -> bool {
    let mut changed = before
        .cells()
        .iter()
        .zip(after.cells())
        .filter(|(b, a)| b != a);

    matches!(
        (changed.next(), changed.next()),
        (Some((Cell::Empty, Cell::Occupied(_))), None)
    )
}

impl Invariant<GameState> for SingleStepHistory {
    fn holds(game: &GameState) -> bool {
        let snapshots = game.history().snapshots();

        snapshots.first() == Some(&Board::new())
            && snapshots.windows(2).all(|w| is_single_step(&w[0], &w[1]))
    }

    fn description() -> &'static str {
        "Each history snapshot adds exactly one mark to an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for cell in [4, 0, 8, 2] {
            game.apply_move(cell).unwrap();
        }
        assert!(SingleStepHistory::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();

        let overwrite = game.current_board().with_mark(Position::Center, Player::O);
        game.history.snapshots.push(overwrite);

        assert!(!SingleStepHistory::holds(&game));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut game = GameState::new();
        game.history.snapshots[0] = Board::new().with_mark(Position::TopLeft, Player::X);
        assert!(!SingleStepHistory::holds(&game));
    }
}
