//! Command-line interface for the terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Rewind tic-tac-toe - play in the terminal and jump back to any earlier move
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Tic-tac-toe with a jumpable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rewind_tictactoe"]).unwrap();
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_log_options() {
        let cli = Cli::try_parse_from([
            "rewind_tictactoe",
            "--log-file",
            "game.log",
            "--log-level",
            "rewind_tictactoe=debug",
        ])
        .unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
        assert_eq!(cli.log_level, "rewind_tictactoe=debug");
    }
}
