use std::sync::RwLock;

use stockroom_inventory::Inventory;

use super::json_file::to_pretty_json;
use super::r#trait::{InventoryStore, StoreError};

const LOCATION: &str = "in-memory store";

/// In-memory inventory store.
///
/// Keeps the encoded JSON bytes rather than the `Inventory` value, so loads go
/// through the same decoding as the file store. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    contents: RwLock<Option<Vec<u8>>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored bytes (which need not be valid JSON).
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: RwLock::new(Some(bytes.into())),
        }
    }

    /// Currently stored bytes, if anything was saved.
    pub fn contents(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let contents = self.contents.read().map_err(|_| StoreError::Poisoned)?;
        Ok(contents.clone())
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn load(&self) -> Result<Inventory, StoreError> {
        let contents = self.contents.read().map_err(|_| StoreError::Poisoned)?;
        let bytes = contents.as_deref().ok_or_else(|| StoreError::NotFound {
            location: LOCATION.to_string(),
        })?;

        serde_json::from_slice(bytes).map_err(|source| StoreError::Decode {
            location: LOCATION.to_string(),
            source,
        })
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let bytes = to_pretty_json(inventory)?;
        let mut contents = self.contents.write().map_err(|_| StoreError::Poisoned)?;
        *contents = Some(bytes);
        Ok(())
    }
}
