//! Activity log entries describing stock additions.
//!
//! Entries are held in a caller-owned `Vec`; nothing here persists them.

use chrono::{DateTime, Utc};

use crate::stock::{StockAdded, StockEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub item: String,
    pub quantity: i64,
}

impl LogEntry {
    pub fn from_addition(event: &StockAdded) -> Self {
        Self {
            at: event.occurred_at,
            item: event.item.clone(),
            quantity: event.quantity,
        }
    }

    /// Only additions are logged.
    pub fn from_event(event: &StockEvent) -> Option<Self> {
        match event {
            StockEvent::StockAdded(e) => Some(Self::from_addition(e)),
            _ => None,
        }
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.quantity,
            self.item
        )
    }
}
