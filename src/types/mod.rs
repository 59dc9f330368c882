mod event;

pub use event::*;

use alloy::primitives::U256;

/// ID of the order as emitted by the trading contract.
pub type OrderId = U256;

/// Instant in chain history the state/event is up to date with.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, Default)]
pub struct StateInstant {
    block_number: u64,
    block_timestamp: u64,
}

impl StateInstant {
    pub fn new(block_number: u64, block_timestamp: u64) -> Self {
        Self {
            block_number,
            block_timestamp,
        }
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    pub fn block_timestamp(&self) -> u64 {
        self.block_timestamp
    }
}
