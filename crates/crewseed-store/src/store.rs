use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition, TableError};
use tracing::debug;

use crate::errors::StoreError;
use crate::persist::Persistable;

/// Partition holding superior records.
pub const SUPERIORS_PARTITION: &str = "superiors";

/// Partition holding technician records. The name predates the rename
/// of the record type and is kept for on-disk compatibility.
pub const TECHNICS_PARTITION: &str = "technics";

/// Generic keyed store over named redb partitions. Each record is keyed
/// by the decimal string of its identity, so scans come back in
/// lexicographic key order ("10" before "9"), not numeric order.
#[derive(Debug)]
pub struct RecordStore {
    db: Database,
}

impl RecordStore {
    /// Opens (creating if needed) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = Database::create(path)?;
        Ok(Self { db })
    }

    /// Writes every record into `partition` under one transaction. Any
    /// encode or put failure aborts the transaction and nothing is
    /// committed. A repeated identity within one call is last-write-wins.
    pub fn save_all<R: Persistable>(
        &self,
        records: &[R],
        partition: &str,
    ) -> Result<(), StoreError> {
        let definition: TableDefinition<&str, &[u8]> = TableDefinition::new(partition);
        let tx = self.db.begin_write()?;
        {
            let mut table = tx.open_table(definition)?;
            for record in records {
                let key = record.identity().to_string();
                let bytes = record.encode()?;
                table.insert(key.as_str(), bytes.as_slice())?;
            }
        }
        tx.commit()?;
        debug!(partition, records = records.len(), "partition written");
        Ok(())
    }

    /// Reads every record in `partition` under one transaction, in key
    /// order. A partition that was never created is an error, not an
    /// empty result.
    pub fn retrieve_all<R: Persistable>(&self, partition: &str) -> Result<Vec<R>, StoreError> {
        let definition: TableDefinition<&str, &[u8]> = TableDefinition::new(partition);
        let tx = self.db.begin_read()?;
        let table = match tx.open_table(definition) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => {
                return Err(StoreError::PartitionNotFound(partition.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        let mut records = Vec::new();
        for entry in table.iter()? {
            let (_key, value) = entry?;
            records.push(R::decode(value.value())?);
        }
        Ok(records)
    }
}
