use serde::{Deserialize, Serialize};

use crate::ids::FlavorId;
use crate::validate::ValidationError;

/// A named product category the user tracks.
///
/// `exclude_from_random` removes the flavor from weighted random
/// suggestions without deleting its stock (e.g. someone else's flavor,
/// or one being saved for an occasion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    pub id: FlavorId,
    pub name: String,
    pub exclude_from_random: bool,
}

impl Flavor {
    /// Creates a flavor with a fresh id, included in random draws.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FlavorId::new(),
            name: name.into(),
            exclude_from_random: false,
        }
    }

    /// Checks record-local invariants: non-empty id and name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.as_str().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                id: self.id.to_string(),
            });
        }
        Ok(())
    }
}
