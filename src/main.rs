//! hr-directory binary entry point.
//!
//! Parses the CLI, initializes the terminal in raw mode, runs the TUI event
//! loop, and restores the terminal state on exit.
//!
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use hr_directory::api::ApiClient;
use hr_directory::app::{self, AppState, Theme};

#[derive(Parser, Debug)]
#[command(name = "hr-directory", version, about = "Browse and search the employee directory")]
struct Cli {
    /// Base URL of the HR API service.
    #[arg(long, env = "HR_API_BASE_URL", default_value = "http://localhost:8080")]
    api_base_url: String,
    /// Path to the theme configuration file (created with defaults when missing).
    #[arg(long, default_value = "theme.conf")]
    theme: String,
    /// Write logs to this file; logging is disabled otherwise because the
    /// alternate screen owns the terminal.
    #[arg(long, env = "HR_DIRECTORY_LOG")]
    log_file: Option<PathBuf>,
}

/// Install the tracing subscriber when a log file is configured.
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;
    tracing::info!(base_url = %cli.api_base_url, "starting hr-directory");

    let client = ApiClient::new(&cli.api_base_url).context("build API client")?;
    let theme = Theme::load_or_init(&cli.theme);
    let state = AppState::new(client, theme);

    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, state);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
