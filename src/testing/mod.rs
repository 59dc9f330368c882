//! Test utilities.
//!
//! Builders for trading contract events ([`open`], [`close`]), raw logs as
//! returned by `eth_getLogs` ([`log`]) and decoded block batches
//! ([`BlockBuilder`]), so that handlers can be exercised without a node.

use std::sync::Arc;

use alloy::{
    primitives::{Address, TxHash, U256},
    rpc::types::Log,
};
use alloy_sol_types::SolEvent;

use crate::{
    Chain,
    abi::trading::Trading::{self, TradingEvents},
    stream::{RawBlockEvents, RawEvent},
    types::StateInstant,
};

pub const CHAIN_ID: u64 = 56;
pub const TRADING: Address = Address::new([0x7a; 20]);

const BLOCK_TIME_SEC: u64 = 3;
const OPEN_PRICE: u64 = 1000;

/// Chain with the test trading contract.
pub fn chain() -> Chain {
    Chain::custom(CHAIN_ID, TRADING)
}

/// Deterministic trader address.
pub fn trader(n: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = 0xee;
    bytes[19] = n;
    Address::new(bytes)
}

/// `Open` of a long position at a fixed open price.
pub fn open(order_id: u64, trader: Address, margin: u64, leverage: u64) -> Trading::Open {
    open_with(order_id, trader, margin, leverage, OPEN_PRICE, true)
}

pub fn open_with(
    order_id: u64,
    trader: Address,
    margin: u64,
    leverage: u64,
    open_price: u64,
    is_long: bool,
) -> Trading::Open {
    Trading::Open {
        orderId: U256::from(order_id),
        t: Trading::Trade {
            params: Trading::TradeParams {
                trader,
                pairIndex: U256::ZERO,
                margin: U256::from(margin),
                isLong: is_long,
                leverage: U256::from(leverage),
                tp: U256::ZERO,
                sl: U256::ZERO,
            },
            openPrice: U256::from(open_price),
            openTime: U256::ZERO,
        },
        fee: U256::ZERO,
    }
}

/// `Close` paying out `after_fee` to the trader, other amounts zeroed.
pub fn close(order_id: u64, after_fee: u64) -> Trading::Close {
    Trading::Close {
        orderId: U256::from(order_id),
        closePrice: U256::from(OPEN_PRICE),
        closeMargin: U256::ZERO,
        fundingFee: Default::default(),
        rolloverFee: U256::ZERO,
        closeFee: U256::ZERO,
        afterFee: U256::from(after_fee),
        status: 0,
    }
}

/// Raw log of the event emitted by `address` at the given position.
pub fn log<E: SolEvent>(address: Address, block_num: u64, log_index: u64, event: &E) -> Log {
    Log {
        inner: alloy::primitives::Log {
            address,
            data: event.encode_log_data(),
        },
        block_number: Some(block_num),
        block_timestamp: Some(block_num * BLOCK_TIME_SEC),
        transaction_hash: Some(TxHash::with_last_byte(log_index as u8)),
        log_index: Some(log_index),
        removed: false,
        ..Default::default()
    }
}

/// Builder of decoded block batches with sequential log indexes.
pub struct BlockBuilder {
    instant: StateInstant,
    events: Vec<RawEvent>,
}

impl BlockBuilder {
    pub fn new(block_num: u64) -> Self {
        Self {
            instant: StateInstant::new(block_num, block_num * BLOCK_TIME_SEC),
            events: vec![],
        }
    }

    pub fn event(mut self, event: TradingEvents) -> Self {
        let log_index = self.events.len() as u64;
        self.events.push(RawEvent::new(
            TxHash::with_last_byte(log_index as u8),
            log_index,
            Arc::new(event),
        ));
        self
    }

    pub fn open(self, order_id: u64, trader: Address, margin: u64, leverage: u64) -> Self {
        self.event(TradingEvents::Open(open(order_id, trader, margin, leverage)))
    }

    pub fn close(self, order_id: u64, after_fee: u64) -> Self {
        self.event(TradingEvents::Close(close(order_id, after_fee)))
    }

    pub fn build(self) -> RawBlockEvents {
        RawBlockEvents::new(self.instant, self.events)
    }
}
