//! Error types for inventory actions.

use juicestack_model::ValidationError;
use juicestack_storage::StorageError;
use thiserror::Error;

/// Result type for inventory actions.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors that can occur while mutating or persisting the inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Persistence failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// An action's input record failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No flavor with the given id.
    #[error("flavor not found: {0}")]
    FlavorNotFound(String),

    /// No carton with the given id.
    #[error("carton not found: {0}")]
    CartonNotFound(String),

    /// Attempted to take a unit from a carton that has none left.
    #[error("carton is already empty: {0}")]
    EmptyCarton(String),
}
