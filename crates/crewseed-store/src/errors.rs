use thiserror::Error;

/// Errors surfaced by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A read targeted a partition that was never created. Deliberately
    /// distinct from an empty partition.
    #[error("partition not found: {0}")]
    PartitionNotFound(String),
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The backing engine could not be opened or a transaction could not
    /// complete.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<redb::DatabaseError> for StoreError {
    fn from(err: redb::DatabaseError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl From<redb::TransactionError> for StoreError {
    fn from(err: redb::TransactionError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl From<redb::TableError> for StoreError {
    fn from(err: redb::TableError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(err: redb::StorageError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(err: redb::CommitError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}
