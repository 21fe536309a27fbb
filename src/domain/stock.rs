use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A row of the `Stock` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Option<BigDecimal>,
    pub updated_at: Option<DateTime<Utc>>,
}
