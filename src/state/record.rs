use std::sync::Arc;

use crate::{
    abi::{self, trading::Trading::TradingEvents},
    types,
};

/// Flat copy of a decoded trading contract event.
///
/// Every processed log is kept this way, with the decoded payload as is,
/// independently of any derived state it feeds.
#[derive(Clone, Debug)]
pub struct EventRecord {
    id: types::EventId,
    tx_hash: alloy::primitives::TxHash,
    event: Arc<TradingEvents>,
}

impl EventRecord {
    pub fn new(
        id: types::EventId,
        tx_hash: alloy::primitives::TxHash,
        event: Arc<TradingEvents>,
    ) -> Self {
        Self { id, tx_hash, event }
    }

    pub fn id(&self) -> types::EventId {
        self.id
    }

    /// Hash of the transaction emitted the event.
    pub fn tx_hash(&self) -> alloy::primitives::TxHash {
        self.tx_hash
    }

    pub fn event(&self) -> &TradingEvents {
        &self.event
    }

    /// Event name as declared in the contract ABI.
    pub fn name(&self) -> &'static str {
        abi::event_name(&self.event)
    }
}
