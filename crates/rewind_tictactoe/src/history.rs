//! Ordered record of board snapshots.

use super::types::Board;
use serde::Serialize;
use tracing::{debug, instrument};

/// Every board reached so far, starting from the empty board.
///
/// Snapshot 0 is always the empty board and there is always at least one
/// snapshot. Recording a board from an earlier index drops every snapshot
/// after that index first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the starting board.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Records `board` as the successor of snapshot `from`.
    ///
    /// Snapshots after `from` are discarded. Returns how many were dropped.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub(crate) fn record(&mut self, from: usize, board: Board) -> usize {
        let keep = from + 1;
        let discarded = self.snapshots.len().saturating_sub(keep);
        if discarded > 0 {
            debug!(discarded, "Truncating history for new branch");
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(board);
        discarded
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for the jump button of history entry `index`.
pub fn move_label(index: usize) -> String {
    if index > 0 {
        format!("Go to move #{}", index)
    } else {
        "Go to game start".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_starts_with_empty_board() {
        let history = History::new();
        assert_eq!(history.snapshot_count(), 1);
        assert_eq!(history.get(0), Some(&Board::new()));
        assert_eq!(history.get(1), None);
    }

    #[test]
    fn test_record_appends_at_tip() {
        let mut history = History::new();
        let first = Board::new().with_mark(Position::Center, Player::X);

        assert_eq!(history.record(0, first), 0);
        assert_eq!(history.snapshot_count(), 2);
        assert_eq!(history.get(1), Some(&first));
    }

    #[test]
    fn test_record_from_earlier_index_truncates() {
        let mut history = History::new();
        let a = Board::new().with_mark(Position::Center, Player::X);
        let b = a.with_mark(Position::TopLeft, Player::O);
        let c = b.with_mark(Position::TopRight, Player::X);
        history.record(0, a);
        history.record(1, b);
        history.record(2, c);

        let branch = a.with_mark(Position::BottomRight, Player::O);
        assert_eq!(history.record(1, branch), 2);
        assert_eq!(history.snapshots(), &[Board::new(), a, branch]);
    }

    #[test]
    fn test_move_labels() {
        assert_eq!(move_label(0), "Go to game start");
        assert_eq!(move_label(1), "Go to move #1");
        assert_eq!(move_label(9), "Go to move #9");
    }
}
