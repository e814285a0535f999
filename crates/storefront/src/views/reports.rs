use std::sync::Arc;

use stockroom_inventory::{InventoryStore, LookupError, RestockOutcome, StockStatus};

/// Shown when nothing is at or below the threshold.
pub const ALL_STOCKED: &str = "All items are sufficiently stocked!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub name: String,
    pub stock: i64,
    pub status: StockStatus,
}

impl core::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - Stock: {}", self.name, self.stock)?;
        match self.status {
            StockStatus::OutOfStock => f.write_str(" (Out of Stock)"),
            StockStatus::Low => f.write_str(" (Low)"),
            StockStatus::InStock => Ok(()),
        }
    }
}

/// Low-stock reporting with a restock-to-target action.
#[derive(Debug, Clone)]
pub struct ReportsView {
    store: Arc<InventoryStore>,
    threshold: i64,
    target: i64,
}

impl ReportsView {
    pub fn new(store: Arc<InventoryStore>, threshold: i64, target: i64) -> Self {
        Self {
            store,
            threshold,
            target,
        }
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        self.store
            .low_stock_items(self.threshold)
            .iter()
            .map(|p| ReportLine {
                name: p.name().to_string(),
                stock: p.stock(),
                status: p.status(self.threshold),
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let lines = self.lines();
        let mut out = format!("Items with stock <= {}", self.threshold);
        if lines.is_empty() {
            out.push('\n');
            out.push_str(ALL_STOCKED);
        }
        for line in lines {
            out.push('\n');
            out.push_str(&line.to_string());
        }
        out
    }

    pub fn restock_to_target(&self, name: &str) -> Result<String, LookupError> {
        let message = match self.store.restock_to_target(name, self.target)? {
            RestockOutcome::Restocked { name, new_stock, .. } => {
                format!("{name} restocked successfully! New stock: {new_stock} units")
            }
            RestockOutcome::AlreadySufficient { name, stock } => {
                format!("{name} already has sufficient stock ({stock} units)")
            }
        };
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use stockroom_inventory::{SeedProduct, default_seed};

    use super::*;

    fn view_over(seed: Vec<SeedProduct>) -> ReportsView {
        ReportsView::new(Arc::new(InventoryStore::new(seed).unwrap()), 5, 10)
    }

    #[test]
    fn report_lists_low_and_out_in_catalog_order() {
        let view = view_over(vec![
            SeedProduct::new("A", 3),
            SeedProduct::new("B", 10),
            SeedProduct::new("C", 0),
        ]);
        assert_eq!(
            view.render(),
            "Items with stock <= 5\nA - Stock: 3 (Low)\nC - Stock: 0 (Out of Stock)"
        );
    }

    #[test]
    fn fully_stocked_report() {
        let view = view_over(vec![SeedProduct::new("Jungle Hat", 10)]);
        assert_eq!(view.render(), format!("Items with stock <= 5\n{ALL_STOCKED}"));
    }

    #[test]
    fn restock_to_target_messages() {
        let view = view_over(default_seed());
        assert_eq!(
            view.restock_to_target("Safari Keychain").unwrap(),
            "Safari Keychain restocked successfully! New stock: 10 units"
        );
        assert_eq!(
            view.restock_to_target("jungle hat").unwrap(),
            "Jungle Hat already has sufficient stock (10 units)"
        );
        assert!(view.restock_to_target("Canoe").is_err());
    }

    #[test]
    fn restocked_item_leaves_the_report() {
        let view = view_over(default_seed());
        view.restock_to_target("Souvenir T-Shirt").unwrap();
        let names: Vec<_> = view.lines().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Safari Keychain"]);
    }
}
