//! The shared inventory store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, ProductId, StoreId};
use stockroom_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};

use crate::catalog::Catalog;
use crate::error::{AdjustError, LookupError, SaleError};
use crate::event::{AdjustReason, InventoryEvent, StockAdjusted};
use crate::policy::{self, CheckedDelta};
use crate::product::{Product, SeedProduct};

/// Envelope type carried on the store's change stream.
pub type InventoryEnvelope = EventEnvelope<InventoryEvent>;

/// Result of an applied (or zero-sized) stock adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChange {
    pub product_id: ProductId,
    pub name: String,
    pub previous: i64,
    pub current: i64,
    pub delta: i64,
    /// Store version after the change.
    pub version: u64,
}

/// Result of a successful sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleReceipt {
    pub product_id: ProductId,
    pub name: String,
    pub sold: i64,
    pub remaining: i64,
    pub version: u64,
}

/// Outcome of `restock_to_target`. `AlreadySufficient` is informational, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestockOutcome {
    Restocked {
        name: String,
        previous: i64,
        new_stock: i64,
    },
    AlreadySufficient {
        name: String,
        stock: i64,
    },
}

#[derive(Debug)]
struct State {
    catalog: Catalog,
    /// Number of applied mutations since seeding.
    version: u64,
}

impl State {
    fn locate(&self, name: &str) -> Result<usize, LookupError> {
        self.catalog
            .position(name)
            .ok_or_else(|| LookupError::ProductNotFound {
                name: name.to_string(),
            })
    }

    /// Every stock mutation, raw or derived, ends here.
    fn apply(&mut self, position: usize, checked: CheckedDelta) -> StockChange {
        let product = self.catalog.product_at_mut(position);
        let previous = product.stock();
        product.set_stock(checked.new_stock());
        self.version += 1;

        StockChange {
            product_id: product.id_typed(),
            name: product.name().to_string(),
            previous,
            current: checked.new_stock(),
            delta: checked.delta(),
            version: self.version,
        }
    }

    fn unchanged(&self, position: usize) -> StockChange {
        let product = self.catalog.product_at(position);
        StockChange {
            product_id: product.id_typed(),
            name: product.name().to_string(),
            previous: product.stock(),
            current: product.stock(),
            delta: 0,
            version: self.version,
        }
    }
}

enum Mutation {
    Applied(StockChange),
    Unchanged(StockChange),
}

/// Single source of truth for product stock.
///
/// Readers get cloned snapshots; writers go through one write-lock critical
/// section that looks the product up, validates the change against its current
/// stock, applies it, bumps the version and publishes the change. A sale
/// validated against stale stock is therefore impossible even with concurrent
/// callers.
///
/// Consumers learn about changes either by polling [`InventoryStore::version`]
/// or by holding a [`Subscription`] from [`InventoryStore::subscribe`]. Each
/// envelope's sequence number is the version the change produced.
#[derive(Debug)]
pub struct InventoryStore<B = InMemoryEventBus<InventoryEnvelope>> {
    id: StoreId,
    state: RwLock<State>,
    bus: B,
}

impl InventoryStore {
    /// Seed a store that notifies subscribers through an in-memory bus.
    pub fn new(seed: impl IntoIterator<Item = SeedProduct>) -> DomainResult<Self> {
        Self::with_bus(seed, InMemoryEventBus::new())
    }
}

impl<B> InventoryStore<B>
where
    B: EventBus<InventoryEnvelope>,
{
    pub fn with_bus(seed: impl IntoIterator<Item = SeedProduct>, bus: B) -> DomainResult<Self> {
        let catalog = Catalog::seed(seed)?;
        let id = StoreId::new();
        tracing::info!(store = %id, products = catalog.len(), "inventory store seeded");

        Ok(Self {
            id,
            state: RwLock::new(State {
                catalog,
                version: 0,
            }),
            bus,
        })
    }

    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Number of stock mutations applied so far.
    pub fn version(&self) -> u64 {
        self.read().version
    }

    /// Snapshot of every product, in catalog order.
    pub fn catalog(&self) -> Vec<Product> {
        self.read().catalog.products().to_vec()
    }

    /// Snapshot together with the version it reflects.
    pub fn versioned_catalog(&self) -> (u64, Vec<Product>) {
        let state = self.read();
        (state.version, state.catalog.products().to_vec())
    }

    /// First product whose name case-insensitively equals `name`.
    pub fn product(&self, name: &str) -> Option<Product> {
        self.read().catalog.find(name).cloned()
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().catalog.get(id).cloned()
    }

    pub fn subscribe(&self) -> Subscription<InventoryEnvelope> {
        self.bus.subscribe()
    }

    /// Raw stock adjustment by a signed delta.
    ///
    /// Rejects unknown names and any delta that would leave the stock negative
    /// or overflow it. A zero delta succeeds without bumping the version.
    pub fn adjust_stock(&self, name: &str, delta: i64) -> Result<StockChange, AdjustError> {
        let outcome = self.mutate(name, AdjustReason::Adjustment, |product| {
            if delta == 0 {
                return Ok(None);
            }
            policy::adjustment(product, delta).map(Some)
        });

        match outcome {
            Ok(Mutation::Applied(change) | Mutation::Unchanged(change)) => Ok(change),
            Err(err) => {
                tracing::debug!(product = %name, delta, error = %err, "stock adjustment rejected");
                Err(err)
            }
        }
    }

    /// Sell `quantity` units of the named product.
    pub fn record_sale(&self, name: &str, quantity: i64) -> Result<SaleReceipt, SaleError> {
        let outcome = if quantity <= 0 {
            Err(SaleError::InvalidQuantity {
                requested: quantity,
            })
        } else {
            self.mutate(name, AdjustReason::Sale, |product| {
                policy::sale(product, quantity).map(Some)
            })
        };

        match outcome {
            Ok(Mutation::Applied(change) | Mutation::Unchanged(change)) => Ok(SaleReceipt {
                product_id: change.product_id,
                name: change.name,
                sold: -change.delta,
                remaining: change.current,
                version: change.version,
            }),
            Err(err) => {
                tracing::debug!(product = %name, quantity, error = %err, "sale rejected");
                Err(err)
            }
        }
    }

    /// Add `amount` units to the named product. No upper bound beyond the
    /// counter's own range.
    pub fn restock(&self, name: &str, amount: u32) -> Result<StockChange, AdjustError> {
        let outcome = self.mutate(name, AdjustReason::Restock, |product| {
            if amount == 0 {
                return Ok(None);
            }
            policy::restock(product, amount).map(Some)
        });

        match outcome {
            Ok(Mutation::Applied(change) | Mutation::Unchanged(change)) => Ok(change),
            Err(err) => {
                tracing::debug!(product = %name, amount, error = %err, "restock rejected");
                Err(err)
            }
        }
    }

    /// Bring the named product up to exactly `target` units.
    pub fn restock_to_target(
        &self,
        name: &str,
        target: i64,
    ) -> Result<RestockOutcome, LookupError> {
        let outcome = self.mutate(name, AdjustReason::RestockToTarget, |product| {
            Ok::<_, LookupError>(policy::restock_to_target(product, target))
        });

        match outcome {
            Ok(Mutation::Applied(change)) => Ok(RestockOutcome::Restocked {
                name: change.name,
                previous: change.previous,
                new_stock: change.current,
            }),
            Ok(Mutation::Unchanged(change)) => {
                tracing::debug!(
                    product = %change.name,
                    stock = change.current,
                    target,
                    "already at or above target"
                );
                Ok(RestockOutcome::AlreadySufficient {
                    name: change.name,
                    stock: change.current,
                })
            }
            Err(err) => {
                tracing::debug!(
                    product = %name,
                    target,
                    error = %err,
                    "restock to target rejected"
                );
                Err(err)
            }
        }
    }

    /// Products with `0 <= stock <= threshold`, in catalog order.
    pub fn low_stock_items(&self, threshold: i64) -> Vec<Product> {
        self.read()
            .catalog
            .iter()
            .filter(|p| policy::is_low_stock(p.stock(), threshold))
            .cloned()
            .collect()
    }

    fn mutate<E>(
        &self,
        name: &str,
        reason: AdjustReason,
        decide: impl FnOnce(&Product) -> Result<Option<CheckedDelta>, E>,
    ) -> Result<Mutation, E>
    where
        E: From<LookupError>,
    {
        let mut state = self.write();
        let position = state.locate(name)?;

        let Some(checked) = decide(state.catalog.product_at(position))? else {
            return Ok(Mutation::Unchanged(state.unchanged(position)));
        };

        let change = state.apply(position, checked);
        tracing::info!(
            product = %change.name,
            reason = reason.as_str(),
            delta = change.delta,
            stock = change.current,
            version = change.version,
            "stock adjusted"
        );

        // Published while still holding the write lock so envelopes leave in
        // version order.
        self.publish(&change, reason);

        Ok(Mutation::Applied(change))
    }

    fn publish(&self, change: &StockChange, reason: AdjustReason) {
        let event = InventoryEvent::StockAdjusted(StockAdjusted {
            product_id: change.product_id,
            name: change.name.clone(),
            previous: change.previous,
            current: change.current,
            delta: change.delta,
            reason,
            occurred_at: Utc::now(),
        });

        if let Err(err) = self
            .bus
            .publish(EventEnvelope::wrap(self.id, change.version, event))
        {
            tracing::warn!(
                version = change.version,
                error = %err,
                "failed to publish stock change"
            );
        }
    }

    // Stock and version are written together after all validation, so a
    // poisoned lock still guards a consistent catalog.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
