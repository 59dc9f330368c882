use alloy::primitives::{Address, I256, U256};
use serde::Serialize;

use super::Outcome;
use crate::{abi::trading::Trading, error::IndexerError, types};

/// Opening terms of an order, captured from the `Open` event so they are
/// known when the position closes and only the payout is emitted.
///
/// All amounts are fixed-point integers in the contract's native units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Order {
    order_id: types::OrderId,
    trader: Address,
    margin: U256,
    leverage: U256,
    open_price: U256,
    is_long: bool,
}

/// Realized result of closing an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClosedTrade {
    /// Payout after fees minus margin.
    pub pnl: I256,

    /// Margin times leverage.
    pub position_size: U256,

    pub outcome: Outcome,
}

impl Order {
    pub fn new(
        order_id: types::OrderId,
        trader: Address,
        margin: U256,
        leverage: U256,
        open_price: U256,
        is_long: bool,
    ) -> Self {
        Self {
            order_id,
            trader,
            margin,
            leverage,
            open_price,
            is_long,
        }
    }

    pub(crate) fn from_event(e: &Trading::Open) -> Self {
        let params = &e.t.params;
        Self::new(
            e.orderId,
            params.trader,
            params.margin,
            params.leverage,
            e.t.openPrice,
            params.isLong,
        )
    }

    pub fn order_id(&self) -> types::OrderId {
        self.order_id
    }

    /// Address of the trader owning the position.
    pub fn trader(&self) -> Address {
        self.trader
    }

    /// Collateral committed to the position.
    pub fn margin(&self) -> U256 {
        self.margin
    }

    pub fn leverage(&self) -> U256 {
        self.leverage
    }

    pub fn open_price(&self) -> U256 {
        self.open_price
    }

    pub fn is_long(&self) -> bool {
        self.is_long
    }

    /// Computes the realized outcome given the net amount returned to the
    /// trader after all fees.
    ///
    /// `after_fee` and margin must be below 2^255 to fit signed PnL,
    /// otherwise [`IndexerError::Overflow`] is returned.
    pub fn close(&self, after_fee: U256) -> Result<ClosedTrade, IndexerError> {
        let payout = I256::try_from(after_fee).map_err(|_| IndexerError::Overflow("pnl"))?;
        let margin = I256::try_from(self.margin).map_err(|_| IndexerError::Overflow("pnl"))?;
        let pnl = payout
            .checked_sub(margin)
            .ok_or(IndexerError::Overflow("pnl"))?;
        let position_size = self
            .margin
            .checked_mul(self.leverage)
            .ok_or(IndexerError::Overflow("position size"))?;
        Ok(ClosedTrade {
            pnl,
            position_size,
            outcome: Outcome::of(pnl),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    fn order(margin: u64, leverage: u64) -> Order {
        Order::new(
            U256::from(1),
            address!("0x00000000000000000000000000000000000000aa"),
            U256::from(margin),
            U256::from(leverage),
            U256::from(1000),
            true,
        )
    }

    #[test]
    fn test_close_win() {
        let trade = order(100, 5).close(U256::from(150)).unwrap();
        assert_eq!(trade.pnl, I256::try_from(50).unwrap());
        assert_eq!(trade.position_size, U256::from(500));
        assert_eq!(trade.outcome, Outcome::Win);
    }

    #[test]
    fn test_close_draw() {
        let trade = order(100, 5).close(U256::from(100)).unwrap();
        assert_eq!(trade.pnl, I256::ZERO);
        assert_eq!(trade.outcome, Outcome::Draw);
    }

    #[test]
    fn test_close_loss() {
        // Liquidated position returns nothing
        let trade = order(100, 20).close(U256::ZERO).unwrap();
        assert_eq!(trade.pnl, I256::try_from(-100).unwrap());
        assert_eq!(trade.position_size, U256::from(2000));
        assert_eq!(trade.outcome, Outcome::Loss);
    }

    #[test]
    fn test_close_overflow() {
        let o = order(100, 5);
        assert!(matches!(
            o.close(U256::MAX),
            Err(IndexerError::Overflow("pnl"))
        ));
        // Largest signed payout still fits
        let max = U256::from(1) << 255usize;
        assert!(o.close(max - U256::from(1)).is_ok());
        assert!(matches!(
            o.close(max),
            Err(IndexerError::Overflow("pnl"))
        ));

        let o = Order::new(
            U256::from(1),
            Address::ZERO,
            U256::MAX / U256::from(2),
            U256::from(3),
            U256::ZERO,
            false,
        );
        assert!(matches!(
            o.close(U256::ZERO),
            Err(IndexerError::Overflow("position size"))
        ));
    }
}
