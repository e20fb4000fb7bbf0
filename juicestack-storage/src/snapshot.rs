//! Versioned JSON snapshot codec.

use serde::{Deserialize, Serialize};

use juicestack_model::{Carton, Flavor, validate_snapshot};

use crate::error::{StorageError, StorageResult};
use crate::kv::KvStore;

/// The key the whole inventory lives under.
pub const INVENTORY_KEY: &str = "inventory";

/// Schema version written by this build; older or newer documents are
/// rejected on load rather than guessed at.
pub const SCHEMA_VERSION: u32 = 1;

/// The persisted shape of the entire inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub schema_version: u32,
    pub flavors: Vec<Flavor>,
    pub cartons: Vec<Carton>,
}

impl Default for InventorySnapshot {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl InventorySnapshot {
    /// Wraps live collections in the current schema version.
    #[must_use]
    pub fn new(flavors: Vec<Flavor>, cartons: Vec<Carton>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            flavors,
            cartons,
        }
    }
}

/// Loads and validates the inventory snapshot.
///
/// `Ok(None)` means the key was never written (first launch). A
/// present-but-unreadable snapshot is an error: malformed JSON,
/// an unknown `schema_version`, or data failing model validation.
pub fn load_inventory<S: KvStore>(store: &S) -> StorageResult<Option<InventorySnapshot>> {
    let Some(raw) = store.get(INVENTORY_KEY)? else {
        return Ok(None);
    };

    let snapshot: InventorySnapshot = serde_json::from_str(&raw)?;
    if snapshot.schema_version != SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchema {
            found: snapshot.schema_version,
            supported: SCHEMA_VERSION,
        });
    }
    validate_snapshot(&snapshot.flavors, &snapshot.cartons)?;
    Ok(Some(snapshot))
}

/// Serializes and writes the snapshot under [`INVENTORY_KEY`].
pub fn save_inventory<S: KvStore>(store: &mut S, snapshot: &InventorySnapshot) -> StorageResult<()> {
    let raw = serde_json::to_string(snapshot)?;
    store.set(INVENTORY_KEY, &raw)
}

/// Removes the persisted inventory entirely.
pub fn clear_inventory<S: KvStore>(store: &mut S) -> StorageResult<()> {
    store.remove(INVENTORY_KEY)
}
