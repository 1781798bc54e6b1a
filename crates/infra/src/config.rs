//! Environment configuration.

use std::path::PathBuf;

use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

use crate::store::DEFAULT_INVENTORY_PATH;

pub const INVENTORY_PATH_VAR: &str = "STOCKROOM_INVENTORY_PATH";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockroomConfig {
    pub inventory_path: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl StockroomConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable lookup. Unset variables use the
    /// defaults; unparsable values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(INVENTORY_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.inventory_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(_) => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_LOW_STOCK_THRESHOLD,
                    "{LOW_STOCK_THRESHOLD_VAR} is not an integer; using default"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = StockroomConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, StockroomConfig::default());
        assert_eq!(config.inventory_path, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn reads_overrides() {
        let config = StockroomConfig::from_lookup(lookup_from(&[
            (INVENTORY_PATH_VAR, "/tmp/stock.json"),
            (LOW_STOCK_THRESHOLD_VAR, " 12 "),
        ]));
        assert_eq!(config.inventory_path, PathBuf::from("/tmp/stock.json"));
        assert_eq!(config.low_stock_threshold, 12);
    }

    #[test]
    fn invalid_threshold_falls_back_to_default() {
        let config = StockroomConfig::from_lookup(lookup_from(&[
            (LOW_STOCK_THRESHOLD_VAR, "five"),
            (INVENTORY_PATH_VAR, "   "),
        ]));
        assert_eq!(config, StockroomConfig::default());
    }
}
