use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use stockroom_inventory::Inventory;

use super::r#trait::{InventoryStore, StoreError};

/// File used when no path is configured.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Inventory persisted as a UTF-8 JSON object in a single file.
///
/// Writes use 4-space indentation and keep keys in inventory order. Each
/// save overwrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_PATH)
    }
}

/// Encode an inventory as pretty JSON with 4-space indentation.
pub fn to_pretty_json(inventory: &Inventory) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    inventory
        .serialize(&mut serializer)
        .map_err(StoreError::Encode)?;
    Ok(buf)
}

impl InventoryStore for JsonFileStore {
    fn load(&self) -> Result<Inventory, StoreError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StoreError::NotFound {
                    location: self.location(),
                }
            } else {
                StoreError::Io {
                    location: self.location(),
                    source,
                }
            }
        })?;

        let inventory: Inventory =
            serde_json::from_str(&text).map_err(|source| StoreError::Decode {
                location: self.location(),
                source,
            })?;

        tracing::info!(path = %self.path.display(), items = inventory.len(), "loaded inventory");
        Ok(inventory)
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let bytes = to_pretty_json(inventory)?;
        std::fs::write(&self.path, bytes).map_err(|source| StoreError::Io {
            location: self.location(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), items = inventory.len(), "saved inventory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Aggregate;

    fn sample() -> Inventory {
        [("apple".to_string(), 7), ("banana".to_string(), 5)]
            .into_iter()
            .collect()
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        let inventory = sample();
        store.save(&inventory).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, inventory);
        assert_eq!(loaded.version(), 0);
    }

    #[test]
    fn writes_four_space_indentation_in_inventory_order() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        store.save(&sample()).unwrap();
        let text = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "{\n    \"apple\": 7,\n    \"banana\": 5\n}");
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        store.save(&sample()).unwrap();
        store.save(&Inventory::new()).unwrap();
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{}");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_not_found_and_loads_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        assert!(matches!(store.load(), Err(StoreError::NotFound { .. })));
        assert!(store.load_or_empty().is_empty());
    }

    #[test]
    fn malformed_file_is_decode_error_and_loads_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);

        assert!(matches!(store.load(), Err(StoreError::Decode { .. })));
        assert!(store.load_or_empty().is_empty());
    }

    #[test]
    fn unreadable_file_is_io_error_and_loads_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, [0x7b, 0xff, 0xfe, 0x7d]).unwrap();
        let store = JsonFileStore::new(&path);

        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
        let (inventory, absorbed) = store.load_or_empty_reported();
        assert!(inventory.is_empty());
        assert!(matches!(absorbed, Some(StoreError::Io { .. })));
        assert!(store.load_or_empty().is_empty());
    }

    #[test]
    fn directory_path_is_io_error_and_loads_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path());

        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
        assert!(store.load_or_empty().is_empty());
    }

    #[test]
    fn non_integer_quantities_are_decode_errors() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, r#"{"apple": "ten"}"#).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Decode { .. })));
    }

    #[test]
    fn default_path_is_inventory_json() {
        assert_eq!(JsonFileStore::default().path(), Path::new("inventory.json"));
    }
}
