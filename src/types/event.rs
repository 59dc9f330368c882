use std::fmt;

use alloy::primitives::TxHash;

/// Events from a specific block, in log order.
#[derive(Debug)]
pub struct BlockEvents<T> {
    instant: super::StateInstant,
    events: Vec<T>,
}

/// Event along with its position in the chain.
#[derive(Debug)]
pub struct EventContext<T> {
    pub(crate) tx_hash: TxHash,
    pub(crate) log_index: u64,
    pub(crate) event: T,
}

/// Identity of a processed log: chain, block and log position.
///
/// Rendered as `{chain_id}_{block_number}_{log_index}`, which is the key of
/// the flat event records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId {
    pub chain_id: u64,
    pub block_number: u64,
    pub log_index: u64,
}

impl<T> BlockEvents<T> {
    pub fn new(instant: super::StateInstant, events: Vec<T>) -> Self {
        Self { instant, events }
    }

    /// Instant the events produced at.
    pub fn instant(&self) -> super::StateInstant {
        self.instant
    }

    pub fn events(&self) -> &[T] {
        &self.events
    }
}

impl<T> EventContext<T> {
    pub fn new(tx_hash: TxHash, log_index: u64, event: T) -> Self {
        Self {
            tx_hash,
            log_index,
            event,
        }
    }

    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    pub fn log_index(&self) -> u64 {
        self.log_index
    }

    pub fn event(&self) -> &T {
        &self.event
    }
}

impl EventId {
    pub fn new(chain_id: u64, block_number: u64, log_index: u64) -> Self {
        Self {
            chain_id,
            block_number,
            log_index,
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.chain_id, self.block_number, self.log_index)
    }
}
