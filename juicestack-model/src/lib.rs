//! Data model for JuiceStack.
//!
//! Defines the record types shared by every other crate:
//! - [`Flavor`] — a named product category, optionally excluded from random draws
//! - [`Carton`] — a physical carton of one flavor with quantity, location and open state
//! - [`Location`] — a stack/height coordinate in physical storage
//! - [`FlavorId`] / [`CartonId`] — string-backed identifiers
//!
//! Validation lives here too: the persistence layer calls
//! [`validate_snapshot`] on load, and the inventory actions validate
//! individual records on input. The selection core assumes well-formed
//! data and performs no validation of its own.

mod carton;
mod flavor;
mod ids;
mod validate;

pub use carton::{Carton, Location};
pub use flavor::Flavor;
pub use ids::{CartonId, FlavorId};
pub use validate::{ValidationError, validate_snapshot};
