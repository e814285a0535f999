use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ProductId, ValueObject};

/// Case-insensitive lookup key for a product name.
///
/// Two names address the same product when their Unicode lowercase forms are
/// identical. Surrounding whitespace is significant: the key compares exactly
/// what the caller passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }
}

impl ValueObject for NameKey {}

/// Display category of a stock level relative to a low-stock threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    Low,
    OutOfStock,
}

impl StockStatus {
    /// `stock == 0` is out of stock, `0 < stock <= threshold` is low.
    pub fn classify(stock: i64, threshold: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock <= threshold {
            StockStatus::Low
        } else {
            StockStatus::InStock
        }
    }

    /// Short badge shown next to a stock count, if any.
    pub fn badge(self) -> Option<&'static str> {
        match self {
            StockStatus::InStock => None,
            StockStatus::Low => Some("Low"),
            StockStatus::OutOfStock => Some("Out"),
        }
    }
}

impl ValueObject for StockStatus {}

/// A tracked product: identity, display name and current stock count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    stock: i64,
}

impl Product {
    pub(crate) fn new(id: ProductId, name: impl Into<String>, stock: i64) -> Self {
        Self {
            id,
            name: name.into(),
            stock,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn key(&self) -> NameKey {
        NameKey::new(&self.name)
    }

    pub fn status(&self, threshold: i64) -> StockStatus {
        StockStatus::classify(self.stock, threshold)
    }

    pub(crate) fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Initial catalog entry; ids are assigned when the catalog is seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    pub stock: i64,
}

impl SeedProduct {
    pub fn new(name: impl Into<String>, stock: i64) -> Self {
        Self {
            name: name.into(),
            stock,
        }
    }
}

/// The storefront's out-of-the-box catalog.
pub fn default_seed() -> Vec<SeedProduct> {
    vec![
        SeedProduct::new("Souvenir T-Shirt", 3),
        SeedProduct::new("Jungle Hat", 10),
        SeedProduct::new("Safari Keychain", 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_key_ignores_case_only() {
        assert_eq!(NameKey::new("Jungle Hat"), NameKey::new("JUNGLE HAT"));
        assert_eq!(NameKey::new("jungle hat"), NameKey::new("Jungle Hat"));
        assert_ne!(NameKey::new("Jungle Hat"), NameKey::new("Jungle Hat "));
        assert_ne!(NameKey::new("Jungle"), NameKey::new("Jungle Hat"));
    }

    #[test]
    fn classify_separates_out_of_stock_from_low() {
        assert_eq!(StockStatus::classify(0, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(1, 5), StockStatus::Low);
        assert_eq!(StockStatus::classify(5, 5), StockStatus::Low);
        assert_eq!(StockStatus::classify(6, 5), StockStatus::InStock);
    }

    #[test]
    fn badges() {
        assert_eq!(StockStatus::InStock.badge(), None);
        assert_eq!(StockStatus::Low.badge(), Some("Low"));
        assert_eq!(StockStatus::OutOfStock.badge(), Some("Out"));
    }

    #[test]
    fn default_seed_matches_storefront_launch_stock() {
        let seed = default_seed();
        let pairs: Vec<_> = seed.iter().map(|p| (p.name.as_str(), p.stock)).collect();
        assert_eq!(
            pairs,
            vec![("Souvenir T-Shirt", 3), ("Jungle Hat", 10), ("Safari Keychain", 2)]
        );
    }

    #[test]
    fn seed_entries_deserialize_from_json() {
        let seed: Vec<SeedProduct> =
            serde_json::from_str(r#"[{"name":"Machete Bottle Opener","stock":4}]"#).unwrap();
        assert_eq!(seed, vec![SeedProduct::new("Machete Bottle Opener", 4)]);
    }
}
