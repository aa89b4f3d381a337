use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use minimax_connect_four::ai::{AgentSpec, EvaluatorKind};
use minimax_connect_four::arena::play_match;

/// Pit two agents against each other and report the score.
#[derive(Parser)]
#[command(name = "selfplay", about = "Play Connect Four agents against each other")]
struct Cli {
    /// First agent: minimax:<depth>, alphabeta:<depth> or random
    #[arg(long, default_value = "alphabeta:5")]
    a: AgentSpec,

    /// Second agent
    #[arg(long, default_value = "random")]
    b: AgentSpec,

    /// Number of games; colours alternate every game
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Leaf evaluator used by search agents
    #[arg(long, value_enum, default_value = "window")]
    evaluator: EvaluatorKind,

    /// Seed for random agents
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut a = cli.a.build(cli.evaluator, cli.seed);
    let mut b = cli.b.build(cli.evaluator, cli.seed.wrapping_add(1));
    info!(a = a.name(), b = b.name(), games = cli.games, "starting match");

    let start = Instant::now();
    let stats = play_match(a.as_mut(), b.as_mut(), cli.games).context("playing match")?;
    let elapsed = start.elapsed();

    println!("-------------------------------------------");
    println!("{} vs {} ({} games)", a.name(), b.name(), stats.games());
    println!("  {:<16} {:>4} wins", a.name(), stats.a_wins);
    println!("  {:<16} {:>4} wins", b.name(), stats.b_wins);
    println!("  {:<16} {:>4}", "draws", stats.draws);
    println!("  average length: {:.1} plies", stats.average_game_length());
    println!("  elapsed: {:.2?}", elapsed);
    println!("-------------------------------------------");
    Ok(())
}
