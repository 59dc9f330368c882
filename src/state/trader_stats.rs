use std::cmp::Ordering;

use alloy::primitives::{Address, I256, U256};
use serde::Serialize;

use super::ClosedTrade;
use crate::error::IndexerError;

/// Outcome of a closed trade, by the sign of its PnL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn of(pnl: I256) -> Self {
        match pnl.cmp(&I256::ZERO) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        }
    }
}

/// Running aggregate of closed trades of a single trader.
///
/// Created zeroed on the first close attributed to the trader and replaced
/// with the value returned by [`Self::apply`] on every later close.
/// `wins + draws + losses == total_trades` holds for every produced value.
#[derive(Clone, derive_more::Debug, PartialEq, Eq, Serialize)]
pub struct TraderStats {
    trader: Address,
    total_trades: u64,
    #[debug("{total_volume}")]
    total_volume: U256,
    #[debug("{total_pnl}")]
    total_pnl: I256,
    wins: u64,
    draws: u64,
    losses: u64,
    win_rate: u64,
}

impl TraderStats {
    /// Fresh record with all counters at zero.
    pub fn new(trader: Address) -> Self {
        Self {
            trader,
            total_trades: 0,
            total_volume: U256::ZERO,
            total_pnl: I256::ZERO,
            wins: 0,
            draws: 0,
            losses: 0,
            win_rate: 0,
        }
    }

    pub fn trader(&self) -> Address {
        self.trader
    }

    /// Number of closed trades.
    pub fn total_trades(&self) -> u64 {
        self.total_trades
    }

    /// Sum of position sizes (margin times leverage) of closed trades.
    pub fn total_volume(&self) -> U256 {
        self.total_volume
    }

    /// Cumulative realized PnL, may be negative.
    pub fn total_pnl(&self) -> I256 {
        self.total_pnl
    }

    pub fn wins(&self) -> u64 {
        self.wins
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn losses(&self) -> u64 {
        self.losses
    }

    /// Percentage of closed trades that were wins, rounded down.
    pub fn win_rate(&self) -> u64 {
        self.win_rate
    }

    /// Returns the stats with the closed trade folded in.
    pub fn apply(&self, trade: &ClosedTrade) -> Result<Self, IndexerError> {
        let mut next = self.clone();
        next.total_trades += 1;
        next.total_volume = self
            .total_volume
            .checked_add(trade.position_size)
            .ok_or(IndexerError::Overflow("total volume"))?;
        next.total_pnl = self
            .total_pnl
            .checked_add(trade.pnl)
            .ok_or(IndexerError::Overflow("total pnl"))?;
        match trade.outcome {
            Outcome::Win => next.wins += 1,
            Outcome::Draw => next.draws += 1,
            Outcome::Loss => next.losses += 1,
        }
        next.win_rate = win_rate(next.wins, next.draws, next.losses);
        Ok(next)
    }
}

fn win_rate(wins: u64, draws: u64, losses: u64) -> u64 {
    let closed = wins as u128 + draws as u128 + losses as u128;
    if closed == 0 {
        return 0;
    }
    (wins as u128 * 100 / closed) as u64
}
