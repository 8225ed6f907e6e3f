use serde::Serialize;
use serde::de::DeserializeOwned;

use crewseed_core::{Superior, Technician};

use crate::errors::StoreError;

/// Capability contract for records the store can persist: an integer
/// identity plus a byte codec. The default codec is JSON so persisted
/// values stay self-describing and inspectable with standard tools.
pub trait Persistable: Serialize + DeserializeOwned {
    fn identity(&self) -> i64;

    fn encode(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec(self)?)
    }

    fn decode(bytes: &[u8]) -> Result<Self, StoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl Persistable for Superior {
    fn identity(&self) -> i64 {
        self.superior_id
    }
}

impl Persistable for Technician {
    fn identity(&self) -> i64 {
        self.technician_id
    }
}
