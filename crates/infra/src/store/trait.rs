use std::sync::Arc;

use thiserror::Error;

use stockroom_inventory::Inventory;

/// Persistence operation error.
///
/// These are **infrastructure errors** (files, encoding) as opposed to
/// domain errors. `location` is a file path or a store label.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{location} not found")]
    NotFound { location: String },

    #[error("could not access {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode {location}: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Diagnostic line printed when a load falls back to an empty inventory.
    pub fn fallback_message(&self) -> String {
        match self {
            StoreError::NotFound { location } => {
                format!("Warning: {location} not found. Starting with empty inventory.")
            }
            StoreError::Decode { location, .. } => {
                format!("Error: Could not decode {location}. Starting with empty inventory.")
            }
            other => format!("Error: {other}. Starting with empty inventory."),
        }
    }
}

/// Whole-inventory load/save boundary.
///
/// Every call reads or writes the complete inventory; there is no partial
/// update and no locking between processes.
pub trait InventoryStore: Send + Sync {
    /// Load the stored inventory.
    fn load(&self) -> Result<Inventory, StoreError>;

    /// Overwrite the stored inventory.
    fn save(&self, inventory: &Inventory) -> Result<(), StoreError>;

    /// Load the stored inventory, falling back to an empty one on any failure.
    ///
    /// The absorbed error is handed back so callers can report it. A missing
    /// store is logged as a warning, anything else as an error.
    fn load_or_empty_reported(&self) -> (Inventory, Option<StoreError>) {
        match self.load() {
            Ok(inventory) => (inventory, None),
            Err(err) => {
                if err.is_not_found() {
                    tracing::warn!(error = %err, "{}", err.fallback_message());
                } else {
                    tracing::error!(error = %err, "{}", err.fallback_message());
                }
                (Inventory::new(), Some(err))
            }
        }
    }

    /// Same as [`InventoryStore::load_or_empty_reported`], dropping the error.
    fn load_or_empty(&self) -> Inventory {
        self.load_or_empty_reported().0
    }
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn load(&self) -> Result<Inventory, StoreError> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        (**self).save(inventory)
    }
}
