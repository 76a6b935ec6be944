//! Command-line interface for graphfill
//!
//! # Usage Examples
//!
//! ```bash
//! # One Person as compact JSON
//! graphfill --schema models.yaml --model Person
//!
//! # Five reproducible Orders with conventions from a configuration file
//! graphfill --schema models.yaml --model Order \
//!   --config population.yaml \
//!   --count 5 --seed 42 --pretty
//!
//! # Shallow graphs with larger collections
//! graphfill --schema models.yaml --model Node --max-depth 3 --items 5
//! ```
//!
//! Set `RUST_LOG=graphfill=debug` to trace convention hits, constructor
//! synthesis and depth cut-offs.

use clap::Parser;
use graphfill::generate::{run_generate, GenerateArgs};

#[derive(Parser)]
#[command(name = "graphfill")]
#[command(about = "Populate model graphs with plausible synthetic test data")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    for document in run_generate(&cli.generate)? {
        println!("{document}");
    }

    Ok(())
}
