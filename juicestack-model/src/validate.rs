//! Snapshot validation, applied by the persistence layer on load.

use std::collections::HashSet;

use thiserror::Error;

use crate::carton::Carton;
use crate::flavor::Flavor;

/// Rejections for malformed inventory data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("record has an empty id")]
    EmptyId,

    #[error("flavor {id} has an empty name")]
    EmptyName { id: String },

    #[error("duplicate flavor id: {id}")]
    DuplicateFlavorId { id: String },

    #[error("duplicate carton id: {id}")]
    DuplicateCartonId { id: String },
}

/// Validates a full inventory snapshot: every record passes its local
/// checks and ids are unique within each collection.
///
/// A carton whose `flavor_id` matches no flavor is NOT an error; the
/// flavor may have been deleted after the carton was recorded.
pub fn validate_snapshot(flavors: &[Flavor], cartons: &[Carton]) -> Result<(), ValidationError> {
    let mut flavor_ids = HashSet::new();
    for flavor in flavors {
        flavor.validate()?;
        if !flavor_ids.insert(&flavor.id) {
            return Err(ValidationError::DuplicateFlavorId {
                id: flavor.id.to_string(),
            });
        }
    }

    let mut carton_ids = HashSet::new();
    for carton in cartons {
        carton.validate()?;
        if !carton_ids.insert(&carton.id) {
            return Err(ValidationError::DuplicateCartonId {
                id: carton.id.to_string(),
            });
        }
    }

    Ok(())
}
