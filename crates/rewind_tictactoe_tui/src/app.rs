//! Application state and key handling.

use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, Position};
use tracing::{debug, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrows move the board cursor; Enter plays.
    Board,
    /// Arrows select a history entry; Enter jumps to it.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cell under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry of the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Last error shown to the player, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c.to_digit(10).map_or(0, |d| d as usize - 1);
                if let Some(position) = Position::from_index(cell) {
                    self.cursor = position;
                    self.play(position);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let last = self.game.snapshot_count() - 1;
        match code {
            KeyCode::Up => self.selected_move = self.selected_move.saturating_sub(1),
            KeyCode::Down => self.selected_move = (self.selected_move + 1).min(last),
            KeyCode::Home => self.selected_move = 0,
            KeyCode::End => self.selected_move = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected_move),
            _ => {}
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = self.cursor.row().saturating_add_signed(d_row).min(2);
        let col = self.cursor.col().saturating_add_signed(d_col).min(2);
        if let Some(position) = Position::from_row_col(row, col) {
            self.cursor = position;
        }
    }

    /// Plays the next player's mark at `position`.
    fn play(&mut self, position: Position) {
        debug!(%position, "Playing");
        match self.game.play(position) {
            Ok(()) => {
                self.selected_move = self.game.current_move();
                self.message = None;
            }
            Err(e) => {
                warn!(error = %e, "Move refused");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Shows the board at history entry `index`.
    fn jump(&mut self, index: usize) {
        debug!(index, "Jumping");
        match self.game.jump_to(index) {
            Ok(()) => self.message = None,
            Err(e) => {
                warn!(error = %e, "Jump refused");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Restarts the game.
    fn new_game(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.selected_move = 0;
        self.message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
