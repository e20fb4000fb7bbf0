//! Key-value persistence shim for JuiceStack.
//!
//! The inventory is persisted as one JSON document in a host key-value
//! store, mirroring the original application's storage contract:
//!
//! - [`KvStore`] — the host contract (get/set/remove, string keys and
//!   JSON string values), with [`MemoryStore`] and [`FileStore`]
//!   backends
//! - [`InventorySnapshot`] — the versioned persisted shape
//! - [`load_inventory`] / [`save_inventory`] / [`clear_inventory`] —
//!   the codec, including schema-version and model validation on load
//!
//! Durability is whatever the backend offers; there is no journaling
//! and no multi-writer coordination (single-user application).

mod error;
mod kv;
mod snapshot;

pub use error::{StorageError, StorageResult};
pub use kv::{FileStore, KvStore, MemoryStore};
pub use snapshot::{
    INVENTORY_KEY, InventorySnapshot, SCHEMA_VERSION, clear_inventory, load_inventory,
    save_inventory,
};
