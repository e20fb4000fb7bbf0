//! Inventory state container for JuiceStack.
//!
//! [`Inventory`] owns the live flavor/carton collections and their
//! persistence backend, exposes the add/update/remove actions the UI
//! layer drives, auto-persists the full snapshot after every mutation,
//! and hosts the suggestion flow built on `juicestack-select`:
//!
//! ```no_run
//! use juicestack_inventory::Inventory;
//! use juicestack_storage::FileStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileStore::open("/tmp/juicestack")?;
//! let inventory = Inventory::open(store)?;
//! match inventory.suggest(None, &mut rand::thread_rng()) {
//!     Ok(s) => println!("drink {} from carton {}", s.flavor.name, s.carton.id),
//!     Err(cause) => println!("{cause}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The selection core never mutates anything; `suggest` borrows the
//! live snapshot and the caller applies the decrement afterwards via
//! [`Inventory::take_from_carton`].

mod error;
mod inventory;
mod suggest;

pub use error::{InventoryError, InventoryResult};
pub use inventory::Inventory;
pub use suggest::{SuggestFailure, Suggestion};
