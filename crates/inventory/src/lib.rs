//! Inventory store.
//!
//! This crate holds the stock-keeping rules as deterministic domain logic
//! (no IO). Loading and saving live in `stockroom-infra`.

pub mod activity;
pub mod inventory;
pub mod report;
pub mod stock;

pub use activity::LogEntry;
pub use inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
pub use report::StockReport;
pub use stock::{
    AddStock, ItemDepleted, RemoveStock, StockAdded, StockCommand, StockEvent, StockRemoved,
};
