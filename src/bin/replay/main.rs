//! Replay tool for trading contract logs.
//!
//! This binary applies previously fetched logs of the trading contract to an
//! in-memory store and prints the resulting per-trader stats.

mod config;
mod error;
mod report;

use clap::Parser;
use std::process::exit;
use tracing::{error, info};
use trading_indexer::{Chain, state::Indexer, store::InMemoryStore, stream};

use config::{CliConfig, EnvConfig};

#[tokio::main]
async fn main() {
    // Load .env file
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: Failed to load .env file: {}", e);
    }

    // Parse environment configuration
    let env_config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to parse environment configuration: {}", e);
            exit(1);
        }
    };

    // Parse CLI arguments
    let cli_config = CliConfig::parse();

    // Set up logging
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(env_config, cli_config).await {
        error!(%e, "Replay failed");
        exit(1);
    }
}

async fn run(env_config: EnvConfig, cli_config: CliConfig) -> error::Result<()> {
    let chain = Chain::custom(env_config.chain_id, env_config.trading_address()?);
    let trader = cli_config.trader()?;

    let logs = report::load_logs(&cli_config.logs).await?;
    let blocks = stream::decode_logs(&chain, &logs)?;
    info!(
        logs = logs.len(),
        blocks = blocks.len(),
        "Decoded trading contract logs"
    );

    let mut indexer = Indexer::new(chain, InMemoryStore::new());
    for block in &blocks {
        indexer.apply_events(block)?;
    }
    if indexer.skipped_closes() > 0 {
        info!(
            skipped_closes = indexer.skipped_closes(),
            "Some closes referenced orders opened before the replayed range, stats are partial"
        );
    }

    let stats = report::collect(indexer.store(), trader);
    if cli_config.json {
        println!("{}", report::render_json(&stats)?);
    } else {
        print!("{}", report::render_table(&stats));
    }
    Ok(())
}
