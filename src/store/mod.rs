//! Key-value store abstraction the handlers persist entities through.
//!
//! [`Store`] mirrors what an indexing runtime offers to event handlers:
//! lookup of a record by entity kind and key, and upsert keyed by the
//! record's own ID. [`UnitOfWork`] buffers the writes of a single event so
//! they land in the backing store together or not at all.

mod memory;
mod unit;

use std::fmt;

pub use memory::InMemoryStore;
pub use unit::UnitOfWork;

use crate::state::{EventRecord, Order, TraderStats};

/// Kind of the persisted entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// Opening terms of an order, keyed by order ID.
    Order,

    /// Per-trader aggregate, keyed by trader address.
    TraderStats,

    /// Flat copy of a decoded contract event, keyed by event ID.
    Event,
}

/// Persisted entity of any kind.
#[derive(Clone, Debug)]
pub enum Record {
    Order(Order),
    TraderStats(TraderStats),
    Event(EventRecord),
}

/// Error returned by store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("expected {expected} record under key {key}, got {actual}")]
    KindMismatch {
        expected: EntityKind,
        actual: EntityKind,
        key: String,
    },
}

/// Key-value store of indexed entities.
pub trait Store {
    /// Returns the record of the given kind stored under the key, if any.
    fn get(&self, kind: EntityKind, key: &str) -> Result<Option<Record>, StoreError>;

    /// Inserts or replaces the record under its own key.
    fn set(&mut self, record: Record) -> Result<(), StoreError>;

    /// Writes all records in order.
    ///
    /// Backends able to commit several writes atomically should override
    /// this, [`UnitOfWork::commit`] relies on it.
    fn write_batch(&mut self, records: Vec<Record>) -> Result<(), StoreError> {
        records.into_iter().try_for_each(|r| self.set(r))
    }
}

/// Typed view of a [`Record`] variant.
pub trait Entity: Sized {
    const KIND: EntityKind;

    /// Key the entity is stored under.
    fn key(&self) -> String;

    fn into_record(self) -> Record;

    fn from_record(record: Record) -> Result<Self, Record>;
}

/// Typed access on top of any [`Store`].
pub trait StoreExt: Store {
    fn load<E: Entity>(&self, key: &str) -> Result<Option<E>, StoreError> {
        self.get(E::KIND, key)?
            .map(|record| {
                E::from_record(record).map_err(|other| StoreError::KindMismatch {
                    expected: E::KIND,
                    actual: other.kind(),
                    key: key.to_string(),
                })
            })
            .transpose()
    }

    fn save<E: Entity>(&mut self, entity: E) -> Result<(), StoreError> {
        self.set(entity.into_record())
    }
}

impl<S: Store + ?Sized> StoreExt for S {}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Order(_) => EntityKind::Order,
            Record::TraderStats(_) => EntityKind::TraderStats,
            Record::Event(_) => EntityKind::Event,
        }
    }

    pub fn key(&self) -> String {
        match self {
            Record::Order(o) => o.key(),
            Record::TraderStats(s) => s.key(),
            Record::Event(e) => e.key(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Order => "Order",
            EntityKind::TraderStats => "TraderStats",
            EntityKind::Event => "Event",
        })
    }
}

impl Entity for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn key(&self) -> String {
        self.order_id().to_string()
    }

    fn into_record(self) -> Record {
        Record::Order(self)
    }

    fn from_record(record: Record) -> Result<Self, Record> {
        match record {
            Record::Order(o) => Ok(o),
            other => Err(other),
        }
    }
}

impl Entity for TraderStats {
    const KIND: EntityKind = EntityKind::TraderStats;

    fn key(&self) -> String {
        self.trader().to_string()
    }

    fn into_record(self) -> Record {
        Record::TraderStats(self)
    }

    fn from_record(record: Record) -> Result<Self, Record> {
        match record {
            Record::TraderStats(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl Entity for EventRecord {
    const KIND: EntityKind = EntityKind::Event;

    fn key(&self) -> String {
        self.id().to_string()
    }

    fn into_record(self) -> Record {
        Record::Event(self)
    }

    fn from_record(record: Record) -> Result<Self, Record> {
        match record {
            Record::Event(e) => Ok(e),
            other => Err(other),
        }
    }
}
