//! Command-line interface for socialgraph-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Default dataset (10k users, 100k follows, ...) into public/data/seed-default
//! socialgraph-seed
//!
//! # Small reproducible dataset
//! socialgraph-seed --users 100 --follows 500 --posts 200 --likes 1000 --comments 300 \
//!   --seed 7 --anchor 2024-06-01T00:00:00Z --out-dir ./seed
//!
//! # Counts from YAML, seed from the command line, with a run report
//! socialgraph-seed --config seed.yaml --seed 9 --report seed/report.json
//!
//! # Check a configuration without writing anything
//! socialgraph-seed --config seed.yaml --dry-run
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use clap::Parser;
use socialgraph_seed::{run_generate, write_report, GenerateArgs};

#[derive(Parser)]
#[command(name = "socialgraph-seed")]
#[command(about = "Generate reproducible synthetic social-graph seed data as JSON files")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let args = cli.generate;

    let config = args.resolve_config()?;
    let options = args.generate_options();
    let report = run_generate(&config, &options).await?;

    if let Some(path) = &args.report {
        write_report(&report, path).await?;
    }

    tracing::info!("{}", report.summary());
    Ok(())
}
