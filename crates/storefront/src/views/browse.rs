use std::sync::Arc;

use stockroom_inventory::{AdjustError, InventoryStore, Product, StockStatus};

use super::EMPTY_CATALOG;

/// One rendered catalog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub name: String,
    pub stock: i64,
    pub status: StockStatus,
}

impl ProductRow {
    pub fn from_product(product: &Product, threshold: i64) -> Self {
        Self {
            name: product.name().to_string(),
            stock: product.stock(),
            status: product.status(threshold),
        }
    }
}

impl core::fmt::Display for ProductRow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - Stock: {}", self.name, self.stock)?;
        if let Some(badge) = self.status.badge() {
            write!(f, " ({badge})")?;
        }
        Ok(())
    }
}

/// Inventory browsing: the full catalog with status badges and a manual
/// fixed-size restock action.
#[derive(Debug, Clone)]
pub struct BrowseView {
    store: Arc<InventoryStore>,
    threshold: i64,
    restock_increment: u32,
}

impl BrowseView {
    pub fn new(store: Arc<InventoryStore>, threshold: i64, restock_increment: u32) -> Self {
        Self {
            store,
            threshold,
            restock_increment,
        }
    }

    /// Catalog rows, optionally narrowed to names containing `query`
    /// (case-insensitive). A blank query lists everything.
    pub fn rows(&self, query: Option<&str>) -> Vec<ProductRow> {
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.store
            .catalog()
            .iter()
            .filter(|p| match &needle {
                Some(needle) => p.name().to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .map(|p| ProductRow::from_product(p, self.threshold))
            .collect()
    }

    pub fn render(&self, query: Option<&str>) -> String {
        let rows = self.rows(query);
        if rows.is_empty() {
            return EMPTY_CATALOG.to_string();
        }
        rows.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// "Restock +N" on the named product.
    pub fn restock(&self, name: &str) -> Result<String, AdjustError> {
        let change = self.store.restock(name, self.restock_increment)?;
        Ok(format!(
            "Restocked {} (+{}). Stock: {} -> {}",
            change.name, self.restock_increment, change.previous, change.current
        ))
    }
}

#[cfg(test)]
mod tests {
    use stockroom_inventory::{SeedProduct, default_seed};

    use super::*;

    fn view() -> BrowseView {
        let store = Arc::new(InventoryStore::new(default_seed()).unwrap());
        BrowseView::new(store, 5, 5)
    }

    #[test]
    fn renders_every_product_with_badges() {
        assert_eq!(
            view().render(None),
            [
                "Souvenir T-Shirt - Stock: 3 (Low)",
                "Jungle Hat - Stock: 10",
                "Safari Keychain - Stock: 2 (Low)",
            ]
            .join("\n")
        );
    }

    #[test]
    fn out_of_stock_badge() {
        let store = Arc::new(InventoryStore::new(vec![SeedProduct::new("Hat", 0)]).unwrap());
        let view = BrowseView::new(store, 5, 5);
        assert_eq!(view.render(None), "Hat - Stock: 0 (Out)");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let view = view();
        let rows = view.rows(Some("JUNGLE"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Jungle Hat");

        assert_eq!(view.rows(Some("  ")).len(), 3);
        assert_eq!(view.render(Some("canoe")), EMPTY_CATALOG);
    }

    #[test]
    fn manual_restock_adds_fixed_increment() {
        let view = view();
        let message = view.restock("safari keychain").unwrap();
        assert_eq!(message, "Restocked Safari Keychain (+5). Stock: 2 -> 7");
        assert_eq!(view.rows(Some("keychain"))[0].status, StockStatus::InStock);
    }

    #[test]
    fn manual_restock_of_unknown_product() {
        let err = view().restock("Canoe").unwrap_err();
        assert!(matches!(err, AdjustError::ProductNotFound { .. }));
    }

    #[test]
    fn empty_catalog() {
        let store = Arc::new(InventoryStore::new(Vec::new()).unwrap());
        assert_eq!(BrowseView::new(store, 5, 5).render(None), EMPTY_CATALOG);
    }
}
