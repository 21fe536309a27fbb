//! Supplier and customer transaction entities.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Settlement state of a transaction as stored in `PaymentStatus` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment status: {0:?}")]
pub struct UnknownPaymentStatus(pub String);

impl FromStr for PaymentStatus {
    type Err = UnknownPaymentStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(PaymentStatus::Paid),
            "Pending" => Ok(PaymentStatus::Pending),
            other => Err(UnknownPaymentStatus(other.to_string())),
        }
    }
}

/// A purchase from a supplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierTransaction {
    pub id: i32,
    pub supplier_id: i32,
    pub amount: BigDecimal,
    pub payment_status: PaymentStatus,
    pub date: NaiveDate,
}

/// A sale to a customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerTransaction {
    pub id: i32,
    pub customer_id: i32,
    pub amount: BigDecimal,
    pub payment_status: PaymentStatus,
    pub date: NaiveDate,
}

/// An overdue payment from either side of the ledger.
///
/// Serialized without a tag; `supplierId` / `customerId` tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PendingPayment {
    Supplier(SupplierTransaction),
    Customer(CustomerTransaction),
}

impl PendingPayment {
    pub fn id(&self) -> i32 {
        match self {
            PendingPayment::Supplier(tx) => tx.id,
            PendingPayment::Customer(tx) => tx.id,
        }
    }

    pub fn is_supplier(&self) -> bool {
        matches!(self, PendingPayment::Supplier(_))
    }
}

impl From<SupplierTransaction> for PendingPayment {
    fn from(tx: SupplierTransaction) -> Self {
        PendingPayment::Supplier(tx)
    }
}

impl From<CustomerTransaction> for PendingPayment {
    fn from(tx: CustomerTransaction) -> Self {
        PendingPayment::Customer(tx)
    }
}
