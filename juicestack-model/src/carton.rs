use serde::{Deserialize, Serialize};

use crate::ids::{CartonId, FlavorId};
use crate::validate::ValidationError;

/// A position in physical storage: which stack, and how high up in it.
///
/// Pure value type with no identity. Height 0 is the bottom of a stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub stack: u32,
    pub height: u32,
}

impl Location {
    #[must_use]
    pub const fn new(stack: u32, height: u32) -> Self {
        Self { stack, height }
    }
}

/// A physical carton holding `quantity` units of a single flavor.
///
/// `flavor_id` is a reference by value; it may point at a flavor that
/// has since been deleted. Such cartons are simply invisible to the
/// random selector but remain addressable by the priority ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carton {
    pub id: CartonId,
    pub flavor_id: FlavorId,
    pub quantity: u32,
    pub location: Location,
    pub is_open: bool,
}

impl Carton {
    /// Creates an unopened carton with a fresh id.
    #[must_use]
    pub fn new(flavor_id: FlavorId, quantity: u32, location: Location) -> Self {
        Self {
            id: CartonId::new(),
            flavor_id,
            quantity,
            location,
            is_open: false,
        }
    }

    /// Returns true when no units remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Checks record-local invariants: non-empty ids.
    ///
    /// Whether `flavor_id` resolves to a live flavor is deliberately
    /// not checked; dangling references are legal data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.as_str().is_empty() || self.flavor_id.as_str().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(())
    }
}
