use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::BigDecimal;
use sqlx::FromRow;

use crate::domain::{
    CustomerTransaction, FinancialSummary, PaymentStatus, StockItem, SupplierTransaction,
};
use crate::ports::RepositoryError;

/// Raw `Stock` row. Converted to [`StockItem`] once the invariants hold.
#[derive(Debug, FromRow)]
pub struct StockRow {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub unit_price: Option<BigDecimal>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl StockRow {
    pub fn into_domain(self) -> Result<StockItem, RepositoryError> {
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            RepositoryError::Decode(format!(
                "stock {} has negative quantity {}",
                self.id, self.quantity
            ))
        })?;

        Ok(StockItem {
            id: self.id,
            name: self.name,
            quantity,
            unit_price: self.unit_price,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct SupplierTransactionRow {
    pub id: i32,
    pub supplier_id: i32,
    pub amount: BigDecimal,
    pub payment_status: String,
    pub date: NaiveDate,
}

impl SupplierTransactionRow {
    pub fn into_domain(self) -> Result<SupplierTransaction, RepositoryError> {
        Ok(SupplierTransaction {
            id: self.id,
            supplier_id: self.supplier_id,
            amount: self.amount,
            payment_status: parse_status(&self.payment_status)?,
            date: self.date,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct CustomerTransactionRow {
    pub id: i32,
    pub customer_id: i32,
    pub amount: BigDecimal,
    pub payment_status: String,
    pub date: NaiveDate,
}

impl CustomerTransactionRow {
    pub fn into_domain(self) -> Result<CustomerTransaction, RepositoryError> {
        Ok(CustomerTransaction {
            id: self.id,
            customer_id: self.customer_id,
            amount: self.amount,
            payment_status: parse_status(&self.payment_status)?,
            date: self.date,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct SummaryRow {
    pub total_purchases: Option<BigDecimal>,
    pub total_sales: Option<BigDecimal>,
}

impl From<SummaryRow> for FinancialSummary {
    fn from(row: SummaryRow) -> Self {
        FinancialSummary {
            total_purchases: row.total_purchases,
            total_sales: row.total_sales,
        }
    }
}

fn parse_status(raw: &str) -> Result<PaymentStatus, RepositoryError> {
    raw.parse()
        .map_err(|e: crate::domain::transaction::UnknownPaymentStatus| {
            RepositoryError::Decode(e.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_quantity_is_rejected() {
        let row = StockRow {
            id: 7,
            name: "Bolts".to_string(),
            quantity: -1,
            unit_price: None,
            updated_at: None,
        };

        let err = row.into_domain().unwrap_err();
        assert!(matches!(err, RepositoryError::Decode(_)));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let row = SupplierTransactionRow {
            id: 1,
            supplier_id: 2,
            amount: BigDecimal::from(5),
            payment_status: "Overdue".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };

        let err = row.into_domain().unwrap_err();
        assert!(err.to_string().contains("Overdue"));
    }

    #[test]
    fn test_customer_row_converts() {
        let row = CustomerTransactionRow {
            id: 20,
            customer_id: 4,
            amount: BigDecimal::from(50),
            payment_status: "Paid".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };

        let tx = row.into_domain().unwrap();
        assert_eq!(tx.payment_status, PaymentStatus::Paid);
        assert_eq!(tx.customer_id, 4);
    }
}
