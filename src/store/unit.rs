use std::collections::HashMap;

use super::{EntityKind, Record, Store, StoreError};

/// Write-buffering view over a [`Store`] for processing of a single event.
///
/// Reads see the pending writes of this unit first, then the backing store.
/// Pending writes reach the backing store only via [`Self::commit`], as one
/// [`Store::write_batch`] call; dropping the unit discards them.
pub struct UnitOfWork<'s, S: ?Sized> {
    store: &'s mut S,
    pending: HashMap<(EntityKind, String), Record>,
    // Keys in first-write order, so the batch keeps the handler's write order
    order: Vec<(EntityKind, String)>,
}

impl<'s, S: Store + ?Sized> UnitOfWork<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self {
            store,
            pending: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Number of distinct records written so far.
    pub fn pending(&self) -> usize {
        self.order.len()
    }

    /// Flushes pending writes to the backing store.
    pub fn commit(mut self) -> Result<(), StoreError> {
        if self.order.is_empty() {
            return Ok(());
        }
        let batch = self
            .order
            .drain(..)
            .filter_map(|key| self.pending.remove(&key))
            .collect();
        self.store.write_batch(batch)
    }
}

impl<S: Store + ?Sized> Store for UnitOfWork<'_, S> {
    fn get(&self, kind: EntityKind, key: &str) -> Result<Option<Record>, StoreError> {
        match self.pending.get(&(kind, key.to_string())) {
            Some(record) => Ok(Some(record.clone())),
            None => self.store.get(kind, key),
        }
    }

    fn set(&mut self, record: Record) -> Result<(), StoreError> {
        let key = (record.kind(), record.key());
        if self.pending.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{U256, address};

    use super::*;
    use crate::{
        state::{Order, TraderStats},
        store::{InMemoryStore, StoreExt},
    };

    /// Backend recording every batch it receives.
    #[derive(Default)]
    struct BatchLog {
        inner: InMemoryStore,
        batches: Vec<Vec<EntityKind>>,
    }

    impl Store for BatchLog {
        fn get(&self, kind: EntityKind, key: &str) -> Result<Option<Record>, StoreError> {
            self.inner.get(kind, key)
        }

        fn set(&mut self, record: Record) -> Result<(), StoreError> {
            self.inner.set(record)
        }

        fn write_batch(&mut self, records: Vec<Record>) -> Result<(), StoreError> {
            self.batches.push(records.iter().map(Record::kind).collect());
            records.into_iter().try_for_each(|r| self.inner.set(r))
        }
    }

    fn order(id: u64, margin: u64) -> Order {
        Order::new(
            U256::from(id),
            address!("0x00000000000000000000000000000000000000aa"),
            U256::from(margin),
            U256::from(5),
            U256::from(1000),
            true,
        )
    }

    #[test]
    fn test_reads_see_pending_writes() {
        let mut store = InMemoryStore::new();
        let mut uow = UnitOfWork::new(&mut store);
        uow.save(order(1, 100)).unwrap();

        assert_eq!(uow.load::<Order>("1").unwrap(), Some(order(1, 100)));
        assert_eq!(uow.pending(), 1);
    }

    #[test]
    fn test_drop_discards_writes() {
        let mut store = InMemoryStore::new();
        {
            let mut uow = UnitOfWork::new(&mut store);
            uow.save(order(1, 100)).unwrap();
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_single_batch_in_write_order() {
        let mut store = BatchLog::default();
        let trader = address!("0x00000000000000000000000000000000000000aa");

        let mut uow = UnitOfWork::new(&mut store);
        uow.save(order(1, 100)).unwrap();
        uow.save(TraderStats::new(trader)).unwrap();
        // Rewrite of the same key keeps its original position
        uow.save(order(1, 200)).unwrap();
        assert_eq!(uow.pending(), 2);
        uow.commit().unwrap();

        assert_eq!(
            store.batches,
            vec![vec![EntityKind::Order, EntityKind::TraderStats]]
        );
        assert_eq!(store.load::<Order>("1").unwrap(), Some(order(1, 200)));
    }

    #[test]
    fn test_empty_commit_skips_backend() {
        let mut store = BatchLog::default();
        UnitOfWork::new(&mut store).commit().unwrap();
        assert!(store.batches.is_empty());
    }
}
