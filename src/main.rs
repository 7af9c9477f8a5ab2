use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use connect_four::config::AppConfig;
use connect_four::game::GameSession;
use connect_four::report::MoveReport;
use connect_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the first player's color
    #[arg(long)]
    p1_color: Option<String>,

    /// Override the second player's color
    #[arg(long)]
    p2_color: Option<String>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Play these columns without a UI and print each outcome as JSON
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(color) = cli.p1_color {
        config.players.first_color = color;
    }
    if let Some(color) = cli.p2_color {
        config.players.second_color = color;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    config.validate().context("invalid configuration")?;

    match cli.moves {
        Some(moves) => run_headless(&config, &moves),
        None => run_tui(config),
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    // The TUI owns the terminal, so logs only go to a file
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run_headless(config: &AppConfig, moves: &[usize]) -> Result<()> {
    let mut session = GameSession::from_config(config).context("creating game session")?;
    for &column in moves {
        let outcome = session.submit_move(column);
        let report = MoveReport::new(column, &outcome, &session);
        println!("{}", serde_json::to_string(&report)?);
    }
    print!("{}", session.board());
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    let mut app = App::new(config).context("creating game session")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
