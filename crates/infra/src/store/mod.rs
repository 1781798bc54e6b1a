//! Inventory persistence boundary.
//!
//! Stores load and save the whole inventory at once. The file store is what
//! the binary uses; the in-memory store backs tests.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryInventoryStore;
pub use json_file::{DEFAULT_INVENTORY_PATH, JsonFileStore, to_pretty_json};
pub use r#trait::{InventoryStore, StoreError};
