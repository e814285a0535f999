//! Inventory state and stock-mutation engine.
//!
//! One [`InventoryStore`] owns the catalog for a session. Browsing, sale
//! recording and low-stock reporting all read snapshots from it and change
//! stock only through its guarded mutation path, so every change is validated,
//! versioned and announced to subscribers in the same place.

pub mod catalog;
pub mod error;
pub mod event;
pub mod policy;
pub mod product;
pub mod store;

pub use catalog::Catalog;
pub use error::{AdjustError, LookupError, SaleError};
pub use event::{AdjustReason, InventoryEvent, StockAdjusted};
pub use policy::CheckedDelta;
pub use product::{NameKey, Product, SeedProduct, StockStatus, default_seed};
pub use store::{InventoryEnvelope, InventoryStore, RestockOutcome, SaleReceipt, StockChange};
