//! Cursor invariant: the current move indexes an existing snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= current_move < snapshot_count`.
pub struct CursorInRange;

impl Invariant<GameState> for CursorInRange {
    fn holds(game: &GameState) -> bool {
        game.current_move() < game.snapshot_count()
    }

    fn description() -> &'static str {
        "Current move points at an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_jumps() {
        let mut game = GameState::new();
        game.apply_move(0).unwrap();
        game.apply_move(1).unwrap();
        for m in [2, 0, 1] {
            game.jump_to(m).unwrap();
            assert!(CursorInRange::holds(&game));
        }
    }

    #[test]
    fn test_past_end_violates() {
        let mut game = GameState::new();
        game.current_move = 1;
        assert!(!CursorInRange::holds(&game));
    }
}
