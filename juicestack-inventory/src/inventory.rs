//! The inventory state container.

use tracing::{debug, info};

use juicestack_model::{Carton, CartonId, Flavor, FlavorId, ValidationError};
use juicestack_storage::{InventorySnapshot, KvStore, clear_inventory, load_inventory, save_inventory};

use crate::error::{InventoryError, InventoryResult};

/// Owns the live flavor and carton collections plus their persistence
/// backend. Every mutation validates its input, applies, then writes
/// the full snapshot back — the explicit-container replacement for the
/// original application's ambient auto-persisting store.
#[derive(Debug)]
pub struct Inventory<S: KvStore> {
    flavors: Vec<Flavor>,
    cartons: Vec<Carton>,
    store: S,
}

impl<S: KvStore> Inventory<S> {
    /// Opens the inventory from `store`, starting empty on first launch.
    pub fn open(store: S) -> InventoryResult<Self> {
        let snapshot = load_inventory(&store)?.unwrap_or_default();
        info!(
            flavors = snapshot.flavors.len(),
            cartons = snapshot.cartons.len(),
            "inventory loaded"
        );
        Ok(Self {
            flavors: snapshot.flavors,
            cartons: snapshot.cartons,
            store,
        })
    }

    // ── Read access ─────────────────────────────────────────────

    #[must_use]
    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    #[must_use]
    pub fn cartons(&self) -> &[Carton] {
        &self.cartons
    }

    #[must_use]
    pub fn flavor(&self, id: &FlavorId) -> Option<&Flavor> {
        self.flavors.iter().find(|f| &f.id == id)
    }

    #[must_use]
    pub fn carton(&self, id: &CartonId) -> Option<&Carton> {
        self.cartons.iter().find(|c| &c.id == id)
    }

    /// Sum of `quantity` over every carton of `flavor_id`.
    #[must_use]
    pub fn total_stock(&self, flavor_id: &FlavorId) -> u64 {
        self.cartons
            .iter()
            .filter(|c| &c.flavor_id == flavor_id)
            .map(|c| u64::from(c.quantity))
            .sum()
    }

    // ── Flavor actions ──────────────────────────────────────────

    pub fn add_flavor(&mut self, flavor: Flavor) -> InventoryResult<()> {
        flavor.validate()?;
        if self.flavor(&flavor.id).is_some() {
            return Err(ValidationError::DuplicateFlavorId {
                id: flavor.id.to_string(),
            }
            .into());
        }
        debug!(id = %flavor.id, name = %flavor.name, "add flavor");
        self.flavors.push(flavor);
        self.persist()
    }

    /// Replaces the flavor with the same id.
    pub fn update_flavor(&mut self, flavor: Flavor) -> InventoryResult<()> {
        flavor.validate()?;
        let Some(slot) = self.flavors.iter_mut().find(|f| f.id == flavor.id) else {
            return Err(InventoryError::FlavorNotFound(flavor.id.to_string()));
        };
        debug!(id = %flavor.id, "update flavor");
        *slot = flavor;
        self.persist()
    }

    /// Removes a flavor. Its cartons are kept: they become invisible
    /// to the random selector but stay addressable by the ranker.
    pub fn remove_flavor(&mut self, id: &FlavorId) -> InventoryResult<()> {
        let before = self.flavors.len();
        self.flavors.retain(|f| &f.id != id);
        if self.flavors.len() == before {
            return Err(InventoryError::FlavorNotFound(id.to_string()));
        }
        debug!(id = %id, "remove flavor");
        self.persist()
    }

    // ── Carton actions ──────────────────────────────────────────

    pub fn add_carton(&mut self, carton: Carton) -> InventoryResult<()> {
        carton.validate()?;
        if self.carton(&carton.id).is_some() {
            return Err(ValidationError::DuplicateCartonId {
                id: carton.id.to_string(),
            }
            .into());
        }
        debug!(id = %carton.id, flavor = %carton.flavor_id, quantity = carton.quantity, "add carton");
        self.cartons.push(carton);
        self.persist()
    }

    /// Replaces the carton with the same id.
    pub fn update_carton(&mut self, carton: Carton) -> InventoryResult<()> {
        carton.validate()?;
        let Some(slot) = self.cartons.iter_mut().find(|c| c.id == carton.id) else {
            return Err(InventoryError::CartonNotFound(carton.id.to_string()));
        };
        debug!(id = %carton.id, "update carton");
        *slot = carton;
        self.persist()
    }

    pub fn remove_carton(&mut self, id: &CartonId) -> InventoryResult<()> {
        let before = self.cartons.len();
        self.cartons.retain(|c| &c.id != id);
        if self.cartons.len() == before {
            return Err(InventoryError::CartonNotFound(id.to_string()));
        }
        debug!(id = %id, "remove carton");
        self.persist()
    }

    /// Takes one unit from a carton: decrements its quantity and marks
    /// it open (you cannot take from a sealed carton). The emptied
    /// carton stays in the inventory at quantity zero.
    ///
    /// Returns the carton's state after the take.
    pub fn take_from_carton(&mut self, id: &CartonId) -> InventoryResult<Carton> {
        let Some(carton) = self.cartons.iter_mut().find(|c| &c.id == id) else {
            return Err(InventoryError::CartonNotFound(id.to_string()));
        };
        if carton.quantity == 0 {
            return Err(InventoryError::EmptyCarton(id.to_string()));
        }
        carton.quantity -= 1;
        carton.is_open = true;
        let taken = carton.clone();
        debug!(id = %id, remaining = taken.quantity, "take from carton");
        self.persist()?;
        Ok(taken)
    }

    // ── Whole-inventory actions ─────────────────────────────────

    /// Wipes the live state and the persisted snapshot.
    pub fn clear(&mut self) -> InventoryResult<()> {
        info!("clearing inventory");
        self.flavors.clear();
        self.cartons.clear();
        clear_inventory(&mut self.store)?;
        Ok(())
    }

    fn persist(&mut self) -> InventoryResult<()> {
        let snapshot = InventorySnapshot::new(self.flavors.clone(), self.cartons.clone());
        save_inventory(&mut self.store, &snapshot)?;
        Ok(())
    }
}
