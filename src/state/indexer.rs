use tracing::trace;

use super::*;
use crate::{
    Chain,
    abi::trading::Trading::TradingEvents,
    store::UnitOfWork,
    stream,
};

/// Effect of a single applied event on the indexed state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Event recorded as a flat record only.
    Recorded,

    /// Opening terms of the order stored.
    Opened(types::OrderId),

    /// Trader stats updated with the closed trade.
    Closed(CloseOutcome),

    /// Close of an order without known opening terms, stats left as is.
    CloseSkipped(types::OrderId),
}

/// Applies decoded trading events to the backing [`Store`].
///
/// Events are expected in chain order. Each batch passed to
/// [`Self::apply_events`] is applied as a single unit of work, as is a single
/// event passed to [`Self::apply_event`].
#[derive(Debug)]
pub struct Indexer<S> {
    chain: Chain,
    store: S,
    instant: Option<types::StateInstant>,
    skipped_closes: u64,
}

impl<S: Store> Indexer<S> {
    pub fn new(chain: Chain, store: S) -> Self {
        Self {
            chain,
            store,
            instant: None,
            skipped_closes: 0,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Instant of the last applied block, if any.
    pub fn instant(&self) -> Option<types::StateInstant> {
        self.instant
    }

    /// Number of closes skipped because the order was never seen opening.
    ///
    /// Non-zero value means trader stats are incomplete, usually due to
    /// indexing started after some positions were opened.
    pub fn skipped_closes(&self) -> u64 {
        self.skipped_closes
    }

    /// Applies all events of the block.
    ///
    /// Blocks at or below the last applied one are ignored and `None` is
    /// returned. On failure nothing from the block is written.
    pub fn apply_events(
        &mut self,
        events: &stream::RawBlockEvents,
    ) -> Result<Option<Vec<Effect>>, IndexerError> {
        let instant = events.instant();
        if self
            .instant
            .is_some_and(|last| last.block_number() >= instant.block_number())
        {
            // Block already applied
            return Ok(None);
        }

        let mut uow = UnitOfWork::new(&mut self.store);
        let effects = events
            .events()
            .iter()
            .map(|event| apply(&self.chain, &mut uow, instant, event))
            .collect::<Result<Vec<_>, _>>()?;
        uow.commit()?;

        self.instant = Some(instant);
        self.count_skipped(&effects);
        Ok(Some(effects))
    }

    /// Applies a single event.
    ///
    /// Not deduplicated: applying the same event twice applies it twice.
    pub fn apply_event(
        &mut self,
        instant: types::StateInstant,
        event: &stream::RawEvent,
    ) -> Result<Effect, IndexerError> {
        let mut uow = UnitOfWork::new(&mut self.store);
        let effect = apply(&self.chain, &mut uow, instant, event)?;
        uow.commit()?;

        self.count_skipped(std::slice::from_ref(&effect));
        Ok(effect)
    }

    fn count_skipped(&mut self, effects: &[Effect]) {
        self.skipped_closes += effects
            .iter()
            .filter(|e| matches!(e, Effect::CloseSkipped(_)))
            .count() as u64;
    }
}

fn apply<S: Store + ?Sized>(
    chain: &Chain,
    store: &mut S,
    instant: types::StateInstant,
    event: &stream::RawEvent,
) -> Result<Effect, IndexerError> {
    let id = types::EventId::new(chain.chain_id(), instant.block_number(), event.log_index());
    let record = EventRecord::new(id, event.tx_hash(), event.event().clone());
    trace!(%id, name = record.name(), "event recorded");
    store.save(record)?;

    Ok(match event.event().as_ref() {
        TradingEvents::Open(e) => {
            record_open(store, Order::from_event(e))?;
            Effect::Opened(e.orderId)
        }
        TradingEvents::Close(e) => match record_close(store, e.orderId, e.afterFee)? {
            Some(outcome) => Effect::Closed(outcome),
            None => Effect::CloseSkipped(e.orderId),
        },
        _ => Effect::Recorded,
    })
}
