//! Per-trader stats report.

use std::{fmt::Write, path::Path};

use alloy::{primitives::Address, rpc::types::Log};
use itertools::Itertools;
use trading_indexer::{state::TraderStats, store::InMemoryStore};

use crate::error::Result;

/// Reads a JSON array of logs from the file.
pub async fn load_logs(path: &Path) -> Result<Vec<Log>> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Stats of all traders, or of the given one, sorted by trader address.
pub fn collect(store: &InMemoryStore, trader: Option<Address>) -> Vec<TraderStats> {
    store
        .all::<TraderStats>()
        .filter(|s| trader.is_none_or(|t| s.trader() == t))
        .sorted_by_key(TraderStats::trader)
        .collect()
}

pub fn render_json(stats: &[TraderStats]) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

pub fn render_table(stats: &[TraderStats]) -> String {
    let mut out = format!(
        "{:<42} {:>7} {:>5} {:>5} {:>6} {:>4} {:>24} {:>24}\n",
        "trader", "trades", "wins", "draws", "losses", "win%", "volume", "pnl"
    );
    for s in stats {
        // Writing to a String never fails
        _ = writeln!(
            out,
            "{:<42} {:>7} {:>5} {:>5} {:>6} {:>4} {:>24} {:>24}",
            s.trader(),
            s.total_trades(),
            s.wins(),
            s.draws(),
            s.losses(),
            s.win_rate(),
            s.total_volume(),
            s.total_pnl(),
        );
    }
    out
}
