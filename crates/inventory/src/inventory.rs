use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockroom_core::{Aggregate, DomainError, DomainResult, Event};

use crate::activity::LogEntry;
use crate::report::StockReport;
use crate::stock::{
    AddStock, ItemDepleted, RemoveStock, StockAdded, StockCommand, StockEvent, StockRemoved,
};

/// Threshold used by [`Inventory::low_stock_default`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Item name to quantity mapping, in the order names were first seen.
///
/// Removal deletes any entry whose quantity falls to zero or below. Additions
/// are not validated, so a negative `add` can leave a negative entry.
///
/// Serializes as a plain JSON object (`{"apple": 7}`); the event `version`
/// is not part of the serialized form.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: IndexMap<String, i64>,
    version: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: IndexMap<String, i64>) -> Self {
        Self { items, version: 0 }
    }

    /// Add `quantity` units of `item`, recording the addition in `log`.
    ///
    /// An empty item name is ignored and nothing is logged.
    pub fn add(&mut self, item: &str, quantity: i64, log: &mut Vec<LogEntry>) {
        self.add_stock(&AddStock::new(item, quantity, Utc::now()), log);
    }

    pub fn add_stock(&mut self, command: &AddStock, log: &mut Vec<LogEntry>) {
        let events = self.decide_add(command);
        for event in &events {
            self.apply(event);
        }
        log.extend(events.iter().filter_map(LogEntry::from_event));
    }

    /// Remove `quantity` units of `item` and return what is left.
    ///
    /// The entry is deleted once it reaches zero or below, in which case the
    /// returned quantity is 0. Fails with `NotFound` without touching the
    /// inventory when the item is not held.
    pub fn remove(&mut self, item: &str, quantity: i64) -> DomainResult<i64> {
        let command = StockCommand::RemoveStock(RemoveStock::new(item, quantity, Utc::now()));
        self.execute(&command)?;
        Ok(self.quantity(item))
    }

    /// Stored quantity, or 0 for items not held.
    pub fn quantity(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Names whose quantity is strictly below `threshold`, in inventory order.
    pub fn low_stock(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, quantity)| **quantity < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn low_stock_default(&self) -> Vec<String> {
        self.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    pub fn report(&self) -> StockReport<'_> {
        StockReport::new(&self.items)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.items.iter().map(|(item, quantity)| (item.as_str(), *quantity))
    }

    pub fn items(&self) -> &IndexMap<String, i64> {
        &self.items
    }

    fn decide_add(&self, cmd: &AddStock) -> Vec<StockEvent> {
        if cmd.item.is_empty() {
            return vec![];
        }
        vec![StockEvent::StockAdded(StockAdded {
            item: cmd.item.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })]
    }

    fn decide_remove(&self, cmd: &RemoveStock) -> DomainResult<Vec<StockEvent>> {
        let Some(current) = self.items.get(&cmd.item).copied() else {
            return Err(DomainError::not_found(cmd.item.clone()));
        };

        let mut events = vec![StockEvent::StockRemoved(StockRemoved {
            item: cmd.item.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })];

        if current.saturating_sub(cmd.quantity) <= 0 {
            events.push(StockEvent::ItemDepleted(ItemDepleted {
                item: cmd.item.clone(),
                occurred_at: cmd.occurred_at,
            }));
        }

        Ok(events)
    }
}

impl Aggregate for Inventory {
    type Command = StockCommand;
    type Event = StockEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            StockEvent::StockAdded(e) => {
                let quantity = self.items.entry(e.item.clone()).or_insert(0);
                *quantity = quantity.saturating_add(e.quantity);
            }
            StockEvent::StockRemoved(e) => {
                if let Some(quantity) = self.items.get_mut(&e.item) {
                    *quantity = quantity.saturating_sub(e.quantity);
                }
            }
            StockEvent::ItemDepleted(e) => {
                // shift_remove keeps the remaining items in their original order.
                self.items.shift_remove(&e.item);
            }
        }

        self.version += 1;
        tracing::debug!(
            event_type = event.event_type(),
            item = event.item(),
            version = self.version,
            "applied stock event"
        );
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            StockCommand::AddStock(cmd) => Ok(self.decide_add(cmd)),
            StockCommand::RemoveStock(cmd) => self.decide_remove(cmd),
        }
    }
}

/// Equal when both hold the same items in the same order.
impl PartialEq for Inventory {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().eq(other.items.iter())
    }
}

impl Eq for Inventory {}

impl FromIterator<(String, i64)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, i64>::deserialize(deserializer).map(Self::from_items)
    }
}
