//! Data-access port consumed by handlers and the alerts aggregator.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{
    Credentials, CustomerTransaction, FinancialSummary, StockItem, SupplierTransaction,
};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("unexpected row data: {0}")]
    Decode(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => RepositoryError::Connection(err.to_string()),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => RepositoryError::Decode(err.to_string()),
            other => RepositoryError::Query(other.to_string()),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only access to users, stock and the two transaction ledgers.
///
/// Every list preserves the order the store returns rows in.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Exact-match lookup of a username/password pair.
    async fn find_user(&self, credentials: &Credentials) -> RepositoryResult<bool>;

    async fn list_stock(&self) -> RepositoryResult<Vec<StockItem>>;

    /// Stock rows with `quantity < threshold`.
    async fn list_low_stock(&self, threshold: u32) -> RepositoryResult<Vec<StockItem>>;

    async fn list_supplier_transactions(&self) -> RepositoryResult<Vec<SupplierTransaction>>;

    async fn list_customer_transactions(&self) -> RepositoryResult<Vec<CustomerTransaction>>;

    /// Pending supplier transactions dated strictly before `before`.
    async fn list_pending_supplier_transactions(
        &self,
        before: NaiveDate,
    ) -> RepositoryResult<Vec<SupplierTransaction>>;

    /// Pending customer transactions dated strictly before `before`.
    async fn list_pending_customer_transactions(
        &self,
        before: NaiveDate,
    ) -> RepositoryResult<Vec<CustomerTransaction>>;

    async fn financial_summary(&self) -> RepositoryResult<FinancialSummary>;

    async fn ping(&self) -> RepositoryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_maps_to_connection() {
        let err = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Connection(_)));
    }

    #[test]
    fn test_row_not_found_maps_to_query() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Query(_)));
    }

    #[test]
    fn test_column_not_found_maps_to_decode() {
        let err = RepositoryError::from(sqlx::Error::ColumnNotFound("quantity".to_string()));
        assert!(matches!(err, RepositoryError::Decode(_)));
    }
}
