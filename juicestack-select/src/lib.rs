//! Selection core for JuiceStack.
//!
//! Two pure functions over read-only inventory snapshots:
//!
//! - [`select_random_flavor`] — picks one eligible flavor with
//!   probability proportional to its total remaining stock, honoring
//!   per-flavor exclusion flags and an optional per-draw exclusion.
//! - [`select_priority_carton`] — picks the single carton of a flavor
//!   that should be depleted next, by a fixed three-level tie-break.
//!
//! Both signal "nothing to pick" with `None`; that is a routine data
//! state (empty inventory, everything excluded, zero stock), never an
//! error. Neither function mutates anything or performs I/O, and the
//! selector is deterministic for a fixed [`rand::Rng`] source. Applying
//! the resulting decrement is the caller's job (`juicestack-inventory`).

mod ranker;
mod selector;

pub use ranker::{priority_order, select_priority_carton};
pub use selector::select_random_flavor;
