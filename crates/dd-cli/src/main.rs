//! `drill`: generate a disaster scenario, a roster, and supplies, then ask
//! the player how they would respond.

mod session;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use dd_core::{Settings, StdSampler};
use dd_narrator::{Narrator, NarratorConfig};

use session::Session;

#[derive(Parser)]
#[command(
    name = "drill",
    about = "Disaster Drill — a random emergency-response scenario generator",
    version
)]
struct Cli {
    /// TOML settings file (default: built-in settings)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for a reproducible scenario
    #[arg(short, long)]
    seed: Option<u64>,

    /// Do not clear the screen before the briefing
    #[arg(long)]
    no_clear: bool,

    /// Wrap width in columns
    #[arg(long, default_value = "80")]
    width: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path),
        None => Settings::builtin(),
    }
    .map_err(|e| e.to_string())?;

    let sampler = match cli.seed {
        Some(seed) => {
            tracing::debug!(seed, "using fixed seed");
            StdSampler::seeded(seed)
        }
        None => StdSampler::from_entropy(),
    };
    let narrator = Narrator::new(NarratorConfig::new().with_width(cli.width));

    let mut session = Session::new(&settings, sampler, narrator).with_clear_screen(!cli.no_clear);
    let stdin = io::stdin();
    session
        .run(stdin.lock(), io::stdout().lock())
        .map_err(|e| e.to_string())?;
    tracing::debug!(state = ?session.state(), "session finished");
    Ok(())
}
