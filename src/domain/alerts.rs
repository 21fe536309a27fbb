use bigdecimal::BigDecimal;
use serde::Serialize;

use super::{PendingPayment, StockItem};

/// Combined low-stock and overdue-payment report. Built per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsReport {
    pub low_stock: Vec<StockItem>,
    pub pending_payments: Vec<PendingPayment>,
}

/// Purchase and sales totals. A side with no rows sums to `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_purchases: Option<BigDecimal>,
    pub total_sales: Option<BigDecimal>,
}
