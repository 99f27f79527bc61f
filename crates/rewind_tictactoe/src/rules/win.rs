//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight rows, columns or diagonals that win the game.
///
/// Values only come from [`WinningLine::ALL`], so a `WinningLine` is always
/// one of the fixed triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Position; 3]")]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Every winning line, in the order they are checked.
    pub const ALL: [WinningLine; 8] = [
        // Rows
        WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
        WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The player holding all three cells of this line on `board`, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            cell.player()
        } else {
            None
        }
    }
}

/// Triple that is not one of the eight winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{:?} is not a winning line", _0)]
pub struct NotAWinningLine(pub [Position; 3]);

impl std::error::Error for NotAWinningLine {}

impl TryFrom<[Position; 3]> for WinningLine {
    type Error = NotAWinningLine;

    fn try_from(positions: [Position; 3]) -> Result<Self, Self::Error> {
        WinningLine::ALL
            .into_iter()
            .find(|line| line.0 == positions)
            .ok_or(NotAWinningLine(positions))
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "{{{}, {}, {}}}", a, b, c)
    }
}

/// Finds the first completed line on the board.
///
/// Lines are scanned in [`WinningLine::ALL`] order, so when several lines
/// are complete the earliest one is reported.
#[instrument]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    WinningLine::ALL
        .into_iter()
        .find_map(|line| line.owner(board).map(|player| (player, line)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter, Position::TopRight]);
        assert_eq!(find_winning_line(&board), Some((Player::X, WinningLine::ALL[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(Player::O, &[Position::TopRight, Position::Center, Position::BottomLeft]);
        let (player, line) = find_winning_line(&board).expect("diagonal is complete");
        assert_eq!(player, Player::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter])
            .with_mark(Position::TopRight, Player::O);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_ties() {
        // Top row and left column both complete; the row comes first.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(find_winning_line(&board), Some((Player::X, WinningLine::ALL[0])));
    }

    #[test]
    fn test_try_from_rejects_non_lines() {
        let line = WinningLine::try_from([Position::TopLeft, Position::Center, Position::BottomRight]);
        assert_eq!(line, Ok(WinningLine::ALL[6]));

        let bogus = [Position::TopLeft, Position::Center, Position::BottomCenter];
        assert_eq!(WinningLine::try_from(bogus), Err(NotAWinningLine(bogus)));
    }

    #[test]
    fn test_display_lists_indices() {
        assert_eq!(WinningLine::ALL[7].to_string(), "{2, 4, 6}");
    }
}
