use alloy::sol_types;

use crate::store::StoreError;

/// Error returned while decoding or applying trading events.
///
/// Missing order data on close is not an error, see
/// [`crate::state::record_close`].
#[derive(Debug, thiserror::Error)]
pub enum IndexerError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("log decode error: {0}")]
    Decode(String),

    #[error("log is missing {0}")]
    MissingLogField(&'static str),

    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
}

impl From<sol_types::Error> for IndexerError {
    fn from(value: sol_types::Error) -> Self {
        Self::Decode(value.to_string())
    }
}
