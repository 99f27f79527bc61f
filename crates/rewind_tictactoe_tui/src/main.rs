//! Rewind tic-tac-toe - terminal UI
//!
//! Play on the board, then jump back to any earlier move from the move list.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli)?;

    info!("Starting rewind tic-tac-toe");

    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new());

    restore_terminal()?;
    terminal.show_cursor()?;

    info!("Exiting");
    res
}

/// Leaves raw mode and the alternate screen.
///
/// Safe to call when neither was entered.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Restores the terminal before the default panic message is printed, so a
/// panic in the UI loop does not leave the shell in raw mode.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Err(e) = restore_terminal() {
            eprintln!("Failed to restore terminal: {}", e);
        }
        original(info);
    }));
}

/// Sends logs to `--log-file` if given; otherwise logging stays off so the
/// UI owns the terminal.
fn init_tracing(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
