//! Terminal host for Noughts & Crosses

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod renderer;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_crosses::Token;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::TuiConfig;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = TuiConfig::load_or_default(&cli.config).context("Failed to load config")?;
    if let Some(log_file) = cli.log_file.clone() {
        config = config.with_log_file(log_file);
    }

    // Log to a file so output doesn't interfere with the terminal UI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(config = %cli.config.display(), nought_first = cli.nought_first, "Starting Noughts & Crosses");

    let palette = config
        .colors()
        .palette()
        .context("Invalid colour configuration")?;
    let mut app = App::new(palette);
    if cli.nought_first {
        app.start_with(Token::Nought);
    }

    let mut terminal = setup_terminal()?;
    let res = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        error!(error = %err, "Terminal loop failed");
    }
    info!("Exiting Noughts & Crosses");
    res
}

/// Enters raw mode and the alternate screen, undoing both if any step fails.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    undo_on_error(enter_alternate_screen, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    })
    .context("Failed to set up terminal")
}

fn enter_alternate_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Runs `step`, calling `undo` only if it fails.
fn undo_on_error<T>(
    step: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    step().inspect_err(|err| {
        error!(error = %err, "Terminal setup failed");
        undo();
    })
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key.code)?;
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                let cell = ui::cell_at(area, mouse.column, mouse.row);
                app.handle_mouse(mouse.kind, cell)?;
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_is_undone() {
        let undone = Cell::new(false);
        let res: io::Result<()> = undo_on_error(
            || Err(io::Error::other("no tty")),
            || undone.set(true),
        );
        assert!(res.is_err());
        assert!(undone.get());
    }

    #[test]
    fn test_successful_setup_is_kept() {
        let undone = Cell::new(false);
        let res = undo_on_error(|| Ok(7), || undone.set(true));
        assert_eq!(res.unwrap(), 7);
        assert!(!undone.get());
    }
}
