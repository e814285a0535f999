use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;
use stockroom_events::Event;

/// Which operation produced a stock change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustReason {
    /// Raw `adjust_stock` call.
    Adjustment,
    Sale,
    Restock,
    RestockToTarget,
}

impl AdjustReason {
    pub fn as_str(self) -> &'static str {
        match self {
            AdjustReason::Adjustment => "adjustment",
            AdjustReason::Sale => "sale",
            AdjustReason::Restock => "restock",
            AdjustReason::RestockToTarget => "restock_to_target",
        }
    }
}

/// Event: StockAdjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjusted {
    pub product_id: ProductId,
    pub name: String,
    pub previous: i64,
    pub current: i64,
    pub delta: i64,
    pub reason: AdjustReason,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    StockAdjusted(StockAdjusted),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::StockAdjusted(_) => "inventory.product.stock_adjusted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::StockAdjusted(e) => e.occurred_at,
        }
    }
}
