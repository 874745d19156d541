use anyhow::Result;
use clap::{Parser, Subcommand};
use pipecheck::commands::{check, run};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pipecheck")]
#[command(about = "Build pipeline verification harness", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that pipeline artifacts are present (read-only)
    Check {
        /// Project root to check
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Run the full build pipeline, verifying artifacts after each stage
    Run {
        /// Project root to run against
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Per-stage timeout in seconds
        #[arg(long, default_value_t = 300)]
        timeout: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { root } => check::execute(&root),
        Commands::Run { root, timeout } => {
            let code = run::execute(&root, Duration::from_secs(timeout))?;
            std::process::exit(code);
        }
    }
}
