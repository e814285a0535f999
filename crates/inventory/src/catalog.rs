use std::collections::HashMap;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{NameKey, Product, SeedProduct};

/// Ordered collection of every tracked product.
///
/// Insertion order is preserved and is the order every snapshot and report
/// uses. Names are not required to be unique, but lookups by name always
/// resolve to the *first* product carrying that key: the name index is built
/// once at seed time and later duplicates never enter it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<NameKey, usize>,
}

impl Catalog {
    /// Build a catalog from seed entries, assigning a fresh id to each.
    pub fn seed(seed: impl IntoIterator<Item = SeedProduct>) -> DomainResult<Self> {
        let mut catalog = Catalog::default();

        for entry in seed {
            // Stored trimmed: every input surface trims what the user types.
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(DomainError::validation("product name cannot be empty"));
            }
            if entry.stock < 0 {
                return Err(DomainError::validation(format!(
                    "initial stock for {} cannot be negative (got {})",
                    name, entry.stock
                )));
            }

            let position = catalog.products.len();
            let product = Product::new(ProductId::new(), name, entry.stock);
            let key = product.key();

            if catalog.index.contains_key(&key) {
                tracing::warn!(
                    product = %product.name(),
                    position,
                    "duplicate product name; later entry is unreachable by name"
                );
            } else {
                catalog.index.insert(key, position);
            }
            catalog.products.push(product);
        }

        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Position of the first product whose name case-insensitively equals `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&NameKey::new(name)).copied()
    }

    pub fn find(&self, name: &str) -> Option<&Product> {
        self.position(name).map(|pos| &self.products[pos])
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| *p.id() == id)
    }

    pub(crate) fn product_at(&self, position: usize) -> &Product {
        &self.products[position]
    }

    pub(crate) fn product_at_mut(&mut self, position: usize) -> &mut Product {
        &mut self.products[position]
    }
}
