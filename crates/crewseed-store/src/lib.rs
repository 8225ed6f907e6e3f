//! Keyed persistence for crew records over an embedded redb database.
//!
//! Any record type implementing [`Persistable`] can be saved into and
//! rehydrated from a named partition without per-type storage code.

pub mod errors;
pub mod persist;
pub mod store;

pub use errors::StoreError;
pub use persist::Persistable;
pub use store::{RecordStore, SUPERIORS_PARTITION, TECHNICS_PARTITION};
