//! Indexed trading state.
//!
//! Opened orders are remembered by ID with their opening terms
//! ([`Order`]), so that a later close, which only carries the payout, can be
//! turned into a realized PnL and folded into the trader's running
//! aggregate ([`TraderStats`]).
//!
//! [`Indexer`] drives the handlers from decoded event batches and keeps every
//! event's writes in a single [`crate::store::UnitOfWork`].

mod indexer;
mod order;
mod record;
mod trader_stats;

use alloy::primitives::{Address, U256};
use tracing::{debug, warn};

use crate::{
    error::IndexerError,
    store::{Store, StoreError, StoreExt},
    types,
};

// Public re-exports
pub use indexer::*;
pub use order::*;
pub use record::*;
pub use trader_stats::*;

/// Result of a close that updated trader stats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloseOutcome {
    pub order_id: types::OrderId,
    pub trader: Address,
    pub trade: ClosedTrade,

    /// Trader stats after the update.
    pub stats: TraderStats,
}

/// Stores opening terms of the order, replacing any order with the same ID.
pub fn record_open<S: Store + ?Sized>(store: &mut S, order: Order) -> Result<(), StoreError> {
    debug!(
        order_id = %order.order_id(),
        trader = %order.trader(),
        margin = %order.margin(),
        leverage = %order.leverage(),
        "order opened"
    );
    store.save(order)
}

/// Folds the close of the order into its trader's stats.
///
/// `after_fee` is the net amount returned to the trader after all fees.
///
/// Close of an order never seen opening (eg. a gap in backfilled history)
/// is skipped: nothing is written and `None` is returned.
pub fn record_close<S: Store + ?Sized>(
    store: &mut S,
    order_id: types::OrderId,
    after_fee: U256,
) -> Result<Option<CloseOutcome>, IndexerError> {
    let Some(order) = store.load::<Order>(&order_id.to_string())? else {
        warn!(%order_id, "close of unknown order, trader stats not updated");
        return Ok(None);
    };

    let trade = order.close(after_fee)?;
    let trader = order.trader();
    let stats = store
        .load::<TraderStats>(&trader.to_string())?
        .unwrap_or_else(|| TraderStats::new(trader))
        .apply(&trade)?;
    store.save(stats.clone())?;

    debug!(
        %order_id,
        %trader,
        pnl = %trade.pnl,
        outcome = ?trade.outcome,
        total_trades = stats.total_trades(),
        win_rate = stats.win_rate(),
        "order closed"
    );
    Ok(Some(CloseOutcome {
        order_id,
        trader,
        trade,
        stats,
    }))
}
