//! Stock policies: pure functions from a product snapshot to a validated change.
//!
//! A [`CheckedDelta`] can only be built here, and the store only applies
//! `CheckedDelta`s, so no code path can move stock below zero or overflow the
//! counter.

use crate::error::{AdjustError, SaleError};
use crate::product::Product;

/// A stock change already proven safe for one product snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedDelta {
    delta: i64,
    new_stock: i64,
}

impl CheckedDelta {
    pub fn delta(&self) -> i64 {
        self.delta
    }

    pub fn new_stock(&self) -> i64 {
        self.new_stock
    }
}

/// Validate an arbitrary signed adjustment.
pub fn adjustment(product: &Product, delta: i64) -> Result<CheckedDelta, AdjustError> {
    let stock = product.stock();
    let new_stock = stock.checked_add(delta).ok_or_else(|| AdjustError::Overflow {
        name: product.name().to_string(),
        stock,
        delta,
    })?;

    if new_stock < 0 {
        return Err(AdjustError::NegativeStock {
            name: product.name().to_string(),
            available: stock,
            delta,
        });
    }

    Ok(CheckedDelta { delta, new_stock })
}

/// Validate a sale of `quantity` units.
///
/// Quantity is checked before stock so that a nonsensical request is reported
/// as such even for a product that happens to be sold out.
pub fn sale(product: &Product, quantity: i64) -> Result<CheckedDelta, SaleError> {
    if quantity <= 0 {
        return Err(SaleError::InvalidQuantity {
            requested: quantity,
        });
    }

    let available = product.stock();
    if quantity > available {
        return Err(SaleError::InsufficientStock {
            name: product.name().to_string(),
            available,
            requested: quantity,
        });
    }

    Ok(CheckedDelta {
        delta: -quantity,
        new_stock: available - quantity,
    })
}

/// Validate a fixed-size restock. Only overflow can reject it.
pub fn restock(product: &Product, amount: u32) -> Result<CheckedDelta, AdjustError> {
    adjustment(product, i64::from(amount))
}

/// Delta that brings `product` up to exactly `target`, or `None` when it is
/// already at or above the target.
pub fn restock_to_target(product: &Product, target: i64) -> Option<CheckedDelta> {
    let stock = product.stock();
    let delta = target.checked_sub(stock)?;
    if delta <= 0 {
        return None;
    }

    Some(CheckedDelta {
        delta,
        new_stock: target,
    })
}

/// `0 <= stock <= threshold`: the low-stock report's membership test.
pub fn is_low_stock(stock: i64, threshold: i64) -> bool {
    (0..=threshold).contains(&stock)
}
