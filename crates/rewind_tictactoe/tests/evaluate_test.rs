//! Tests for board evaluation over every possible board.

use rewind_tictactoe::{Board, Cell, GameOutcome, Player, Position, WinningLine, evaluate};

/// Decodes `n` (0..3^9) as a board, one base-3 digit per cell.
fn board_from_code(mut n: u32) -> Board {
    let mut cells = [Cell::Empty; 9];
    for cell in cells.iter_mut() {
        *cell = match n % 3 {
            0 => Cell::Empty,
            1 => Cell::Occupied(Player::X),
            _ => Cell::Occupied(Player::O),
        };
        n /= 3;
    }
    Board::from_cells(cells)
}

fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(board_from_code)
}

#[test]
fn test_every_board_evaluates_consistently() {
    for board in all_boards() {
        let complete: Vec<(WinningLine, Player)> = WinningLine::ALL
            .iter()
            .filter_map(|line| {
                let [a, b, c] = line.positions().map(|p| board.get(p));
                match (a, b, c) {
                    (Cell::Occupied(p), _, _) if a == b && b == c => Some((*line, p)),
                    _ => None,
                }
            })
            .collect();
        let has_empty = board.cells().contains(&Cell::Empty);

        let expected = match complete.first() {
            Some(&(line, player)) => GameOutcome::Win { player, line },
            None if has_empty => GameOutcome::InProgress,
            None => GameOutcome::Draw,
        };
        assert_eq!(evaluate(&board), expected, "board:\n{}", board);
    }
}

#[test]
fn test_each_line_wins_for_each_player() {
    for line in WinningLine::ALL {
        for player in [Player::X, Player::O] {
            let board = line
                .positions()
                .into_iter()
                .fold(Board::new(), |board, pos| board.with_mark(pos, player));

            assert_eq!(evaluate(&board), GameOutcome::Win { player, line });
        }
    }
}

#[test]
fn test_unreachable_board_reports_first_line() {
    // Both players hold a row; X's row comes first in scan order.
    let x = Cell::Occupied(Player::X);
    let o = Cell::Occupied(Player::O);
    let board = Board::from_cells([x, x, x, o, o, o, Cell::Empty, Cell::Empty, Cell::Empty]);

    let outcome = evaluate(&board);
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let x = Cell::Occupied(Player::X);
    let o = Cell::Occupied(Player::O);
    let board = Board::from_cells([x, o, x, o, x, o, o, x, o]);

    assert_eq!(evaluate(&board), GameOutcome::Draw);
    assert!(GameOutcome::Draw.is_decided());
}

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(evaluate(&Board::new()), GameOutcome::InProgress);
    assert!(!GameOutcome::InProgress.is_decided());
}

#[test]
fn test_winning_line_contains() {
    let diagonal = WinningLine::ALL[6];
    assert!(diagonal.contains(Position::Center));
    assert!(!diagonal.contains(Position::TopRight));
}

#[test]
fn test_outcome_serializes_with_named_cells() {
    let outcome = GameOutcome::Win {
        player: Player::O,
        line: WinningLine::ALL[6],
    };
    let json = serde_json::to_value(outcome).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"Win": {"player": "O", "line": ["TopLeft", "Center", "BottomRight"]}})
    );

    let back: GameOutcome = serde_json::from_value(json).unwrap();
    assert_eq!(back, outcome);

    let bogus = serde_json::json!({"Win": {"player": "O", "line": ["TopLeft", "Center", "TopRight"]}});
    assert!(serde_json::from_value::<GameOutcome>(bogus).is_err());
}
