use std::sync::Arc;

use thiserror::Error;

use stockroom_inventory::{InventoryStore, SaleError, SaleReceipt};

/// Longest quantity the sale form accepts.
pub const MAX_QUANTITY_DIGITS: usize = 5;

/// Rejections raised before the store is consulted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter both product name and quantity.")]
    MissingField,

    #[error("Please enter a valid positive number for quantity.")]
    InvalidQuantity,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Sale(#[from] SaleError),
}

/// Free-text sale input as typed by the clerk.
///
/// Input filtering happens on entry: the product name is trimmed, and the
/// quantity keeps only ASCII digits, capped at [`MAX_QUANTITY_DIGITS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleForm {
    product: String,
    quantity: String,
}

/// A parsed sale ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRequest {
    pub product: String,
    pub quantity: i64,
}

impl SaleForm {
    pub fn new(product: &str, quantity: &str) -> Self {
        Self {
            product: product.trim().to_string(),
            quantity: quantity
                .chars()
                .filter(char::is_ascii_digit)
                .take(MAX_QUANTITY_DIGITS)
                .collect(),
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity_text(&self) -> &str {
        &self.quantity
    }

    /// Both fields filled in.
    pub fn is_submittable(&self) -> bool {
        !self.product.is_empty() && !self.quantity.is_empty()
    }

    pub fn parse(&self) -> Result<SaleRequest, FormError> {
        if !self.is_submittable() {
            return Err(FormError::MissingField);
        }

        let quantity: i64 = self.quantity.parse().map_err(|_| FormError::InvalidQuantity)?;
        if quantity <= 0 {
            return Err(FormError::InvalidQuantity);
        }

        Ok(SaleRequest {
            product: self.product.clone(),
            quantity,
        })
    }
}

/// Sale recording.
#[derive(Debug, Clone)]
pub struct SalesView {
    store: Arc<InventoryStore>,
}

impl SalesView {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }

    pub fn submit(&self, form: &SaleForm) -> Result<SaleReceipt, SubmitError> {
        let request = form.parse()?;
        Ok(self.store.record_sale(&request.product, request.quantity)?)
    }

    pub fn confirmation(receipt: &SaleReceipt) -> String {
        format!(
            "Sale recorded: {} {}(s) sold! Remaining stock: {}",
            receipt.sold, receipt.name, receipt.remaining
        )
    }
}
