//! `revwalk`: solve reverse-walk puzzles from problem files.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use revwalk_harness::problem::{load_problem, PolicySpecV1};
use revwalk_harness::runner::{run_problem, RunOverrides};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "revwalk")]
#[command(version)]
#[command(about = "Breadth-first reverse-walk puzzle solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a problem and print the run report as JSON
    Solve {
        /// Problem file (.json)
        #[arg(value_name = "PROBLEM")]
        problem: PathBuf,

        /// Lifetime iteration budget
        #[arg(long, env = "REVWALK_LIMIT")]
        limit: Option<u64>,

        /// Maximum number of queued states
        #[arg(long, env = "REVWALK_ARENA_CAPACITY")]
        arena_capacity: Option<usize>,

        /// Maximum neighbors per node
        #[arg(long)]
        max_degree: Option<usize>,

        /// Stop after this many solutions
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        solutions: u32,

        /// Pretty-print instead of canonical JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the canonical digest of a problem file
    Digest {
        /// Problem file (.json)
        #[arg(value_name = "PROBLEM")]
        problem: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("revwalk=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Solve {
            problem,
            limit,
            arena_capacity,
            max_degree,
            solutions,
            pretty,
        } => {
            let loaded = load_problem(&problem)?;
            let overrides = RunOverrides {
                policy: PolicySpecV1 {
                    iteration_limit: limit,
                    arena_capacity,
                    max_degree,
                },
                max_solutions: usize::try_from(solutions).unwrap_or(usize::MAX),
            };
            let report = run_problem(&loaded, &overrides)
                .with_context(|| format!("solving {}", problem.display()))?;
            let bytes = if pretty {
                serde_json::to_vec_pretty(&report)?
            } else {
                report.to_canonical_bytes()?
            };
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            writeln!(stdout)?;
            stdout.flush()?;
            if !report.found_solution() {
                std::process::exit(2);
            }
        }
        Commands::Digest { problem } => {
            let digest = load_problem(&problem)?.digest()?;
            println!("{digest}");
        }
    }
    Ok(())
}
