use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use swarm_cookbook::console::render;
use swarm_cookbook::orchestrator::Orchestrator;
use swarm_cookbook::recipes::Recipe;

#[derive(Debug, Parser)]
#[command(about = "Runnable multi-agent cookbook recipes")]
struct Args {
    /// Output directory for summaries and spreadsheets
    #[arg(long, global = true, default_value = "out")]
    out_dir: PathBuf,

    #[command(subcommand)]
    recipe: Recipe,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // logging
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter_layer).init();

    tracing::info!("Starting swarm cookbook");

    let orchestrator = Orchestrator::new(args.out_dir);
    match orchestrator.run(args.recipe).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            render::display_error(&e);
            ExitCode::FAILURE
        }
    }
}
