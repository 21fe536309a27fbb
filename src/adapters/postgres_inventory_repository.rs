//! Postgres implementation of InventoryRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::queries;
use crate::domain::{
    Credentials, CustomerTransaction, FinancialSummary, PaymentStatus, StockItem,
    SupplierTransaction,
};
use crate::ports::{InventoryRepository, RepositoryError, RepositoryResult};

/// Postgres-backed inventory repository.
#[derive(Clone)]
pub struct PostgresInventoryRepository {
    pool: PgPool,
}

impl PostgresInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for PostgresInventoryRepository {
    async fn find_user(&self, credentials: &Credentials) -> RepositoryResult<bool> {
        queries::user_exists(&self.pool, &credentials.username, &credentials.password)
            .await
            .map_err(RepositoryError::from)
    }

    async fn list_stock(&self) -> RepositoryResult<Vec<StockItem>> {
        let rows = queries::list_stock(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        rows.into_iter().map(|r| r.into_domain()).collect()
    }

    async fn list_low_stock(&self, threshold: u32) -> RepositoryResult<Vec<StockItem>> {
        let rows = queries::list_stock_below(&self.pool, threshold)
            .await
            .map_err(RepositoryError::from)?;

        rows.into_iter().map(|r| r.into_domain()).collect()
    }

    async fn list_supplier_transactions(&self) -> RepositoryResult<Vec<SupplierTransaction>> {
        let rows = queries::list_supplier_transactions(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        rows.into_iter().map(|r| r.into_domain()).collect()
    }

    async fn list_customer_transactions(&self) -> RepositoryResult<Vec<CustomerTransaction>> {
        let rows = queries::list_customer_transactions(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        rows.into_iter().map(|r| r.into_domain()).collect()
    }

    async fn list_pending_supplier_transactions(
        &self,
        before: NaiveDate,
    ) -> RepositoryResult<Vec<SupplierTransaction>> {
        let rows = queries::list_supplier_transactions_with_status_before(
            &self.pool,
            PaymentStatus::Pending,
            before,
        )
        .await
        .map_err(RepositoryError::from)?;

        rows.into_iter().map(|r| r.into_domain()).collect()
    }

    async fn list_pending_customer_transactions(
        &self,
        before: NaiveDate,
    ) -> RepositoryResult<Vec<CustomerTransaction>> {
        let rows = queries::list_customer_transactions_with_status_before(
            &self.pool,
            PaymentStatus::Pending,
            before,
        )
        .await
        .map_err(RepositoryError::from)?;

        rows.into_iter().map(|r| r.into_domain()).collect()
    }

    async fn financial_summary(&self) -> RepositoryResult<FinancialSummary> {
        let row = queries::financial_summary(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(row.into())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        queries::ping(&self.pool).await.map_err(RepositoryError::from)
    }
}
