//! Typed rejections for stock operations.
//!
//! All of these are expected, recoverable outcomes of user actions. Each
//! message names the precondition that failed and, where quantities are
//! involved, what was available versus what was asked for.

use thiserror::Error;

/// Rejection from the raw `adjust_stock` primitive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdjustError {
    #[error("product \"{name}\" not found in inventory")]
    ProductNotFound { name: String },

    #[error("adjusting {name} by {delta} would leave negative stock (available: {available})")]
    NegativeStock {
        name: String,
        available: i64,
        delta: i64,
    },

    #[error("adjusting {name} by {delta} overflows the stock counter (current: {stock})")]
    Overflow { name: String, stock: i64, delta: i64 },
}

/// Rejection from `record_sale`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaleError {
    #[error("invalid quantity {requested}: enter a positive whole number")]
    InvalidQuantity { requested: i64 },

    #[error("product \"{name}\" not found in inventory")]
    ProductNotFound { name: String },

    #[error("insufficient stock for {name}. Available: {available}, Requested: {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },
}

/// Rejection from name-addressed operations that cannot otherwise fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("product \"{name}\" not found in inventory")]
    ProductNotFound { name: String },
}

impl From<LookupError> for SaleError {
    fn from(value: LookupError) -> Self {
        match value {
            LookupError::ProductNotFound { name } => SaleError::ProductNotFound { name },
        }
    }
}

impl From<LookupError> for AdjustError {
    fn from(value: LookupError) -> Self {
        match value {
            LookupError::ProductNotFound { name } => AdjustError::ProductNotFound { name },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_reports_available_and_requested() {
        let err = SaleError::InsufficientStock {
            name: "Safari Keychain".to_string(),
            available: 2,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for Safari Keychain. Available: 2, Requested: 5"
        );
    }

    #[test]
    fn not_found_quotes_the_name_as_typed() {
        let err = SaleError::from(LookupError::ProductNotFound {
            name: "jungle hatt".to_string(),
        });
        assert_eq!(err.to_string(), "product \"jungle hatt\" not found in inventory");
    }

    #[test]
    fn negative_adjustment_message() {
        let err = AdjustError::NegativeStock {
            name: "Jungle Hat".to_string(),
            available: 10,
            delta: -11,
        };
        assert_eq!(
            err.to_string(),
            "adjusting Jungle Hat by -11 would leave negative stock (available: 10)"
        );
    }
}
