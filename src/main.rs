//! Cascadia -- end-of-game scoring for the hex tile-and-token game.
//!
//! `cascadia score` reads a game file (or stdin) and prints a JSON report.
//! `cascadia demo` scores a randomly generated table.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use cascadia::board::{random_game, PlayerBoard, RandomBoardConfig};
use cascadia::patterns::Strategy;
use cascadia::protocol::{load_game, parse_game};
use cascadia::rules::ScoringRules;
use cascadia::{GameReport, GameScorer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cascadia end-of-game scorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a game file
    Score(ScoreArg),
    /// Score a randomly generated game
    Demo(DemoArg),
}

#[derive(Args, Debug, Clone)]
struct ScoringArg {
    /// Wildlife scoring cards as JSON (default: Card A)
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Pattern strategy: auto, graph or summary
    #[arg(long, default_value_t = Strategy::Auto)]
    strategy: Strategy,
    /// Worker threads for per-player scoring (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

#[derive(Args, Debug, Clone)]
struct ScoreArg {
    /// Game file path, or `-` for stdin
    game: String,
    /// Write the JSON report here and print a summary instead
    #[arg(long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    scoring: ScoringArg,
}

#[derive(Args, Debug, Clone)]
struct DemoArg {
    /// Number of players
    #[arg(long, default_value_t = 2)]
    players: u32,
    /// Random seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Habitat tiles per board
    #[arg(long, default_value_t = 23)]
    tiles: usize,
    /// Write the JSON report here and print a summary instead
    #[arg(long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    scoring: ScoringArg,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Score(arg) => {
            let boards = read_game(&arg.game)?;
            let report = score(&boards, &arg.scoring)?;
            emit(&report, arg.output.as_ref())
        }
        Command::Demo(arg) => {
            let config = RandomBoardConfig {
                tiles: arg.tiles,
                ..Default::default()
            };
            let mut rng = SmallRng::seed_from_u64(arg.seed);
            let boards = random_game(arg.players, &config, &mut rng);
            let report = score(&boards, &arg.scoring)?;
            emit(&report, arg.output.as_ref())
        }
    }
}

fn read_game(source: &str) -> Result<Vec<PlayerBoard>> {
    if source == "-" {
        let mut data = String::new();
        io::stdin()
            .read_to_string(&mut data)
            .context("failed to read game from stdin")?;
        Ok(parse_game(&data)?)
    } else {
        Ok(load_game(source.as_ref())?)
    }
}

fn score(boards: &[PlayerBoard], arg: &ScoringArg) -> Result<GameReport> {
    let rules = match &arg.rules {
        Some(path) => ScoringRules::load(path)?,
        None => ScoringRules::default(),
    };
    let scorer = GameScorer::new(rules).with_strategy(arg.strategy);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(arg.threads)
        .build()
        .context("failed to build rayon thread pool")?;
    Ok(pool.install(|| scorer.score_game(boards))?)
}

fn emit(report: &GameReport, output: Option<&PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            for line in report.breakdown_lines() {
                println!("{line}");
            }
            println!("RESULT: {}", report.winner.explanation);
        }
        None => println!("{json}"),
    }
    Ok(())
}
