//! The three consumers of the inventory store, rendered as plain text.

pub mod browse;
pub mod reports;
pub mod sales;

pub use browse::{BrowseView, ProductRow};
pub use reports::{ReportLine, ReportsView};
pub use sales::{FormError, SaleForm, SaleRequest, SalesView, SubmitError};

/// Shown when there is nothing to list.
pub const EMPTY_CATALOG: &str = "No inventory items available";
