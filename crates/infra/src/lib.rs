//! Infrastructure layer: file persistence and configuration.

pub mod config;
pub mod store;

pub use config::StockroomConfig;
pub use store::{InMemoryInventoryStore, InventoryStore, JsonFileStore, StoreError};
