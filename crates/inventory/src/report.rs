use indexmap::IndexMap;

const SEPARATOR: &str = "--------------------";

/// Printable items report, one `item -> quantity` line per entry.
#[derive(Debug, Clone, Copy)]
pub struct StockReport<'a> {
    items: &'a IndexMap<String, i64>,
}

impl<'a> StockReport<'a> {
    pub(crate) fn new(items: &'a IndexMap<String, i64>) -> Self {
        Self { items }
    }
}

impl core::fmt::Display for StockReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items Report")?;
        writeln!(f, "{SEPARATOR}")?;
        for (item, quantity) in self.items {
            writeln!(f, "{item} -> {quantity}")?;
        }
        writeln!(f, "{SEPARATOR}")
    }
}
