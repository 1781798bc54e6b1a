use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockroom_core::{DomainError, DomainResult, Event};

/// Command: AddStock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddStock {
    pub item: String,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

impl AddStock {
    pub fn new(item: impl Into<String>, quantity: i64, occurred_at: DateTime<Utc>) -> Self {
        Self {
            item: item.into(),
            quantity,
            occurred_at,
        }
    }

    /// Build a command from loosely typed JSON input.
    ///
    /// The item must be a JSON string and the quantity a JSON integer that
    /// fits in `i64`; anything else is a `TypeMismatch`.
    pub fn from_json(
        item: &JsonValue,
        quantity: &JsonValue,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let item = item
            .as_str()
            .ok_or_else(|| DomainError::type_mismatch("item", "a string", item.to_string()))?;
        let quantity = quantity.as_i64().ok_or_else(|| {
            DomainError::type_mismatch("quantity", "an integer", quantity.to_string())
        })?;
        Ok(Self::new(item, quantity, occurred_at))
    }
}

/// Command: RemoveStock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveStock {
    pub item: String,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

impl RemoveStock {
    pub fn new(item: impl Into<String>, quantity: i64, occurred_at: DateTime<Utc>) -> Self {
        Self {
            item: item.into(),
            quantity,
            occurred_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockCommand {
    AddStock(AddStock),
    RemoveStock(RemoveStock),
}

/// Event: StockAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdded {
    pub item: String,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRemoved {
    pub item: String,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemDepleted (quantity fell to zero or below and the entry is dropped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDepleted {
    pub item: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockEvent {
    StockAdded(StockAdded),
    StockRemoved(StockRemoved),
    ItemDepleted(ItemDepleted),
}

impl StockEvent {
    pub fn item(&self) -> &str {
        match self {
            StockEvent::StockAdded(e) => &e.item,
            StockEvent::StockRemoved(e) => &e.item,
            StockEvent::ItemDepleted(e) => &e.item,
        }
    }
}

impl Event for StockEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StockEvent::StockAdded(_) => "inventory.stock.added",
            StockEvent::StockRemoved(_) => "inventory.stock.removed",
            StockEvent::ItemDepleted(_) => "inventory.item.depleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StockEvent::StockAdded(e) => e.occurred_at,
            StockEvent::StockRemoved(e) => e.occurred_at,
            StockEvent::ItemDepleted(e) => e.occurred_at,
        }
    }
}
