//! The fixed demonstration sequence run by the `stockroom` binary.

use std::io::Write;

use anyhow::Context;
use chrono::Utc;
use serde_json::json;

use stockroom_infra::InventoryStore;
use stockroom_inventory::{AddStock, Inventory, LogEntry};

/// Seed, mutate, report, persist, reload and report again.
///
/// Missing or unreadable stored data, the deliberately ill-typed addition and
/// the removal of an unknown item are all reported to `out` and do not stop
/// the sequence; a failed load starts from an empty inventory. Only a failed
/// save or a failed write to `out` is an error. Returns the reloaded inventory.
pub fn run_demo<S, W>(store: &S, low_stock_threshold: i64, out: &mut W) -> anyhow::Result<Inventory>
where
    S: InventoryStore + ?Sized,
    W: Write,
{
    let mut inventory = load_reporting(store, out)?;
    let mut log: Vec<LogEntry> = Vec::new();

    inventory.add("apple", 10, &mut log);
    inventory.add("banana", 5, &mut log);

    match AddStock::from_json(&json!(123), &json!("ten"), Utc::now()) {
        Ok(command) => inventory.add_stock(&command, &mut log),
        Err(err) => writeln!(out, "Error adding item: {err}")?,
    }

    for (item, quantity) in [("apple", 3), ("orange", 1)] {
        if let Err(err) = inventory.remove(item, quantity) {
            writeln!(out, "{err}")?;
        }
    }

    writeln!(out, "Apple stock: {}", inventory.quantity("apple"))?;
    writeln!(out, "Low items: {:?}", inventory.low_stock(low_stock_threshold))?;

    for entry in &log {
        tracing::info!(%entry, "activity");
    }

    store
        .save(&inventory)
        .context("failed to save inventory")?;

    let reloaded = load_reporting(store, out)?;
    writeln!(out, "\nData after saving and reloading:")?;
    write!(out, "{}", reloaded.report())?;

    Ok(reloaded)
}

fn load_reporting<S, W>(store: &S, out: &mut W) -> std::io::Result<Inventory>
where
    S: InventoryStore + ?Sized,
    W: Write,
{
    let (inventory, absorbed) = store.load_or_empty_reported();
    if let Some(err) = absorbed {
        writeln!(out, "{}", err.fallback_message())?;
    }
    Ok(inventory)
}
