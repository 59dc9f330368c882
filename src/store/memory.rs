use std::collections::HashMap;

use super::{Entity, EntityKind, Record, Store, StoreError};

/// Hash map backed [`Store`].
///
/// Never fails, so batches are trivially atomic.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    records: HashMap<EntityKind, HashMap<String, Record>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records of the given kind.
    pub fn len(&self, kind: EntityKind) -> usize {
        self.records.get(&kind).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.records.values().all(HashMap::is_empty)
    }

    /// All entities of the given type, in no particular order.
    pub fn all<E: Entity>(&self) -> impl Iterator<Item = E> + '_ {
        self.records
            .get(&E::KIND)
            .into_iter()
            .flat_map(|table| table.values())
            .filter_map(|record| E::from_record(record.clone()).ok())
    }
}

impl Store for InMemoryStore {
    fn get(&self, kind: EntityKind, key: &str) -> Result<Option<Record>, StoreError> {
        Ok(self
            .records
            .get(&kind)
            .and_then(|table| table.get(key))
            .cloned())
    }

    fn set(&mut self, record: Record) -> Result<(), StoreError> {
        self.records
            .entry(record.kind())
            .or_default()
            .insert(record.key(), record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{U256, address};

    use super::*;
    use crate::{
        state::{Order, TraderStats},
        store::StoreExt,
    };

    #[test]
    fn test_set_replaces_by_key() {
        let trader = address!("0x00000000000000000000000000000000000000aa");
        let mut store = InMemoryStore::new();
        assert!(store.is_empty());

        let first = Order::new(
            U256::from(1),
            trader,
            U256::from(100),
            U256::from(5),
            U256::from(1000),
            true,
        );
        let second = Order::new(
            U256::from(1),
            trader,
            U256::from(200),
            U256::from(2),
            U256::from(900),
            false,
        );
        store.save(first).unwrap();
        store.save(second.clone()).unwrap();

        assert_eq!(store.len(EntityKind::Order), 1);
        assert_eq!(store.load::<Order>("1").unwrap(), Some(second));
        assert_eq!(store.load::<Order>("2").unwrap(), None);
    }

    #[test]
    fn test_kinds_are_separate_tables() {
        let trader = address!("0x00000000000000000000000000000000000000aa");
        let mut store = InMemoryStore::new();
        store.save(TraderStats::new(trader)).unwrap();

        assert_eq!(store.len(EntityKind::TraderStats), 1);
        assert_eq!(store.len(EntityKind::Order), 0);
        assert!(
            store
                .get(EntityKind::Order, &trader.to_string())
                .unwrap()
                .is_none()
        );
        assert_eq!(store.all::<TraderStats>().count(), 1);
        assert_eq!(store.all::<Order>().count(), 0);
    }
}
