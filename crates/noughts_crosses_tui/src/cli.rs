//! Command-line interface for the terminal host.

use clap::Parser;
use std::path::PathBuf;

/// Noughts & Crosses - play in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts_crosses")]
#[command(about = "Play noughts & crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "noughts_crosses.toml")]
    pub config: PathBuf,

    /// Log file path (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Let noughts make the first move
    #[arg(long)]
    pub nought_first: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["noughts_crosses"]);
        assert_eq!(cli.config, PathBuf::from("noughts_crosses.toml"));
        assert!(cli.log_file.is_none());
        assert!(!cli.nought_first);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "noughts_crosses",
            "--config",
            "game.toml",
            "--log-file",
            "game.log",
            "--nought-first",
        ]);
        assert_eq!(cli.config, PathBuf::from("game.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
        assert!(cli.nought_first);
    }
}
