//! Gomoku agent speaking the line protocol on stdin/stdout
//!
//! Logs go to stderr; stdout carries protocol replies only.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use gomoku_agent::{protocol, AIEngine, EngineConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with engine settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Plies searched below each root candidate
    #[arg(long)]
    depth: Option<u8>,

    /// Zobrist key seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Moves tried per search node
    #[arg(long)]
    beam_width: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    let env = env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level);
    env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let level = record.level();
            writeln!(buf, "[{level}] {}: {}", record.target(), record.args())
        })
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr)
        .init();

    let mut config = if let Some(path) = &args.config {
        EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?
    } else {
        EngineConfig::default()
    };
    if let Some(depth) = args.depth {
        config.search_depth = depth;
    }
    if let Some(seed) = args.seed {
        config.hash_seed = Some(seed);
    }
    if let Some(beam_width) = args.beam_width {
        config.beam_width = beam_width;
    }

    let seed = config.hash_seed.unwrap_or_else(clock_seed);
    let mut engine = AIEngine::new(&config, seed).context("starting engine")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let served = protocol::run(&mut engine, stdin.lock(), stdout.lock());
    served.context("protocol I/O failed")
}

/// Seed from wall-clock time, as fresh per run as the clock allows.
#[allow(clippy::cast_possible_truncation)]
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
