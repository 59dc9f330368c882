//! Trading contract indexer.
//!
//! # Overview
//!
//! Event handlers for the perpetuals `Trading` contract: every decoded log
//! is persisted as a flat record, opened orders are remembered by ID, and
//! closing a trade folds its realized PnL into a per-trader running
//! aggregate ([`state::TraderStats`]).
//!
//! Use [`stream::decode_logs`] to turn raw logs into ordered per-block
//! batches, then feed them to [`state::Indexer::apply_events`] backed by any
//! [`store::Store`] implementation.
//!
//! See `./tests` for examples.
//!
//! # Limitations/follow-ups
//!
//! * Log retrieval and chain following are left to the host runtime, logs
//!   are expected to be supplied already fetched.
//!
//! * Order IDs reused by a later `Open` overwrite the earlier order terms,
//!   a pending close of the earlier order then computes PnL against the new
//!   terms.
//!
//! * Closes are not deduplicated, replaying the same event counts it twice.
//!
//! # Testing
//!
//! [`testing`] module provides builders for contract events and blocks.

pub mod abi;
pub mod error;
pub mod state;
pub mod store;
pub mod stream;
pub mod testing;
pub mod types;

use alloy::primitives::Address;

/// Chain the trading contract is deployed on.
#[derive(Clone, Debug)]
pub struct Chain {
    chain_id: u64,
    trading: Address,
}

impl Chain {
    pub fn custom(chain_id: u64, trading: Address) -> Self {
        Self { chain_id, trading }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Address of the trading contract.
    pub fn trading(&self) -> Address {
        self.trading
    }
}
