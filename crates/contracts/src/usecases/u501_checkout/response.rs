use crate::domain::a003_cart::{CartLine, CartTotals};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Снимок оформленного заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    #[serde(rename = "orderId")]
    pub order_id: Uuid,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "rodizioMode")]
    pub rodizio_mode: bool,

    pub lines: Vec<CartLine>,

    #[serde(rename = "itemCount")]
    pub item_count: u32,

    #[serde(rename = "totalPrice")]
    pub total_price: f64,
}

impl OrderSnapshot {
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.item_count,
            total_price: self.total_price,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
