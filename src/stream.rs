use std::sync::Arc;

use alloy::rpc::types::Log;
use alloy_sol_types::SolEventInterface;
use itertools::Itertools;
use tracing::debug;

use crate::{Chain, abi::trading::Trading::TradingEvents, error::IndexerError, types};

pub type RawEvent = types::EventContext<Arc<TradingEvents>>;
pub type RawBlockEvents = types::BlockEvents<RawEvent>;

/// Decodes logs emitted by the trading contract into per-block batches,
/// ordered by block number and then by log index.
///
/// Logs are expected in the shape returned by `eth_getLogs`, in any order.
/// Dropped logs:
/// - emitted by other contracts;
/// - marked as removed;
/// - of events not declared in the trading ABI, eg. proxy upgrades emitted
///   from the same address.
///
/// A log of a declared event that fails to decode is an error.
///
/// See [`crate::abi::trading::Trading::TradingEvents`] for the list of possible
/// events and corresponding details.
pub fn decode_logs(chain: &Chain, logs: &[Log]) -> Result<Vec<RawBlockEvents>, IndexerError> {
    let mut positioned = Vec::with_capacity(logs.len());
    for log in logs {
        if log.address() != chain.trading() {
            continue;
        }
        if log.removed {
            debug!(tx_hash = ?log.transaction_hash, "dropping removed log");
            continue;
        }
        if !log
            .topics()
            .first()
            .is_some_and(|topic| TradingEvents::SELECTORS.contains(&topic.0))
        {
            debug!(
                tx_hash = ?log.transaction_hash,
                topic0 = ?log.topics().first(),
                "dropping log of unknown event"
            );
            continue;
        }
        let block_num = log
            .block_number
            .ok_or(IndexerError::MissingLogField("block number"))?;
        let log_index = log
            .log_index
            .ok_or(IndexerError::MissingLogField("log index"))?;
        positioned.push((block_num, log_index, log));
    }

    positioned
        .into_iter()
        .sorted_by_key(|(block_num, log_index, _)| (*block_num, *log_index))
        .chunk_by(|(block_num, _, _)| *block_num)
        .into_iter()
        .map(|(block_num, logs)| -> Result<RawBlockEvents, IndexerError> {
            let mut block_ts = None;
            let mut events = vec![];
            for (_, log_index, log) in logs {
                block_ts = block_ts.or(log.block_timestamp);
                events.push(RawEvent::new(
                    log.transaction_hash.unwrap_or_default(),
                    log_index,
                    Arc::new(TradingEvents::decode_log(&log.inner)?.data),
                ));
            }
            Ok(RawBlockEvents::new(
                types::StateInstant::new(block_num, block_ts.unwrap_or_default()),
                events,
            ))
        })
        .collect()
}
