use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::{AlertsReport, PendingPayment};
use crate::ports::{InventoryRepository, RepositoryError};

/// Stock items with fewer units than this are reported.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Pending payments older than this many days are reported.
pub const PENDING_PAYMENT_MAX_AGE_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStep {
    LowStock,
    PendingSupplierPayments,
    PendingCustomerPayments,
}

impl AlertStep {
    pub fn failure_message(&self) -> &'static str {
        match self {
            AlertStep::LowStock => "Error fetching low stock alerts",
            AlertStep::PendingSupplierPayments => "Error fetching pending supplier transactions",
            AlertStep::PendingCustomerPayments => "Error fetching pending customer transactions",
        }
    }
}

impl fmt::Display for AlertStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

#[derive(Debug, Error)]
#[error("{step}: {source}")]
pub struct AlertsError {
    pub step: AlertStep,
    #[source]
    pub source: RepositoryError,
}

/// Cut-off date for overdue payments. Rows must be dated strictly before it.
pub fn pending_threshold(now: DateTime<Utc>) -> NaiveDate {
    (now - Duration::days(PENDING_PAYMENT_MAX_AGE_DAYS)).date_naive()
}

/// Builds the combined low-stock and overdue-payment report.
#[derive(Clone)]
pub struct AlertsAggregator {
    repo: Arc<dyn InventoryRepository>,
}

impl AlertsAggregator {
    pub fn new(repo: Arc<dyn InventoryRepository>) -> Self {
        Self { repo }
    }

    /// Runs the three queries one after another; the first failure aborts
    /// the whole report. Supplier payments always precede customer payments.
    pub async fn build_report(&self, now: DateTime<Utc>) -> Result<AlertsReport, AlertsError> {
        let low_stock = self
            .repo
            .list_low_stock(LOW_STOCK_THRESHOLD)
            .await
            .map_err(|source| AlertsError {
                step: AlertStep::LowStock,
                source,
            })?;

        let threshold = pending_threshold(now);

        let supplier = self
            .repo
            .list_pending_supplier_transactions(threshold)
            .await
            .map_err(|source| AlertsError {
                step: AlertStep::PendingSupplierPayments,
                source,
            })?;

        let customer = self
            .repo
            .list_pending_customer_transactions(threshold)
            .await
            .map_err(|source| AlertsError {
                step: AlertStep::PendingCustomerPayments,
                source,
            })?;

        let mut pending_payments = Vec::with_capacity(supplier.len() + customer.len());
        pending_payments.extend(supplier.into_iter().map(PendingPayment::from));
        pending_payments.extend(customer.into_iter().map(PendingPayment::from));

        tracing::debug!(
            low_stock = low_stock.len(),
            pending_payments = pending_payments.len(),
            %threshold,
            "Built alerts report"
        );

        Ok(AlertsReport {
            low_stock,
            pending_payments,
        })
    }
}
