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
use minimax_connect_four::ai::{Algorithm, EvaluatorKind};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::controller::MatchController;
use minimax_connect_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Connect Four against a minimax / alpha-beta opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the search algorithm
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Override the search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Override the leaf evaluator
    #[arg(long, value_enum)]
    evaluator: Option<EvaluatorKind>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,minimax_connect_four=debug")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(algorithm) = cli.algorithm {
        config.search.algorithm = algorithm;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(evaluator) = cli.evaluator {
        config.evaluator = evaluator;
    }
    config.validate().context("invalid settings")?;
    info!(?config, "starting");

    run(MatchController::from_app_config(&config)).context("terminal UI failed")
}

fn run(controller: MatchController) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
