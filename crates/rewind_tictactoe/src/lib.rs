//! Rewind tic-tac-toe - game state with a jumpable move history
//!
//! A 3x3 tic-tac-toe game that records every board reached. The viewer can
//! jump back to any earlier board; playing from there discards the moves
//! that followed and starts a new branch.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation of a single [`Board`]
//! - **History**: the ordered board snapshots, starting from the empty board
//! - **Game**: [`GameState`] owns the history and the index being viewed;
//!   turn, outcome and status text are derived from them on demand
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::GameState;
//!
//! let mut game = GameState::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     game.apply_move(cell)?;
//! }
//! assert_eq!(game.status_text(), "Winner: X");
//! assert_eq!(game.winning_line().map(|l| l.indices()), Some([0, 4, 8]));
//!
//! game.jump_to(0)?;
//! game.apply_move(4)?;
//! assert_eq!(game.snapshot_count(), 2);
//! # Ok::<(), rewind_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use error::{IllegalReason, MoveError};
pub use game::{GameState, MoveEntry};
pub use history::{History, move_label};
pub use outcome::GameOutcome;
pub use position::Position;
pub use rules::{WinningLine, evaluate};
pub use types::{Board, Cell, Player};
