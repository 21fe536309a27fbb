//! In-memory InventoryRepository used by router and service tests.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::sync::Mutex;

use crate::domain::{
    Credentials, CustomerTransaction, FinancialSummary, PaymentStatus, StockItem,
    SupplierTransaction,
};
use crate::ports::{InventoryRepository, RepositoryError, RepositoryResult};

/// Repository operations, used to inject failures and to inspect call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FindUser,
    ListStock,
    ListLowStock,
    ListSupplierTransactions,
    ListCustomerTransactions,
    ListPendingSupplierTransactions,
    ListPendingCustomerTransactions,
    FinancialSummary,
    Ping,
}

#[derive(Default)]
pub struct InMemoryInventoryRepository {
    users: Vec<(String, String)>,
    stock: Vec<StockItem>,
    supplier_transactions: Vec<SupplierTransaction>,
    customer_transactions: Vec<CustomerTransaction>,
    failing: Vec<Operation>,
    calls: Mutex<Vec<Operation>>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, username: &str, password: &str) -> Self {
        self.users.push((username.to_string(), password.to_string()));
        self
    }

    pub fn with_stock(mut self, item: StockItem) -> Self {
        self.stock.push(item);
        self
    }

    pub fn with_supplier_transaction(mut self, tx: SupplierTransaction) -> Self {
        self.supplier_transactions.push(tx);
        self
    }

    pub fn with_customer_transaction(mut self, tx: CustomerTransaction) -> Self {
        self.customer_transactions.push(tx);
        self
    }

    /// Makes `op` fail with a connection error.
    pub fn failing_on(mut self, op: Operation) -> Self {
        self.failing.push(op);
        self
    }

    /// Operations invoked so far, in order.
    pub fn calls(&self) -> Vec<Operation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, op: Operation) -> RepositoryResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(op);
        }
        if self.failing.contains(&op) {
            return Err(RepositoryError::Connection(format!("{op:?} unavailable")));
        }
        Ok(())
    }
}

fn sum<'a>(amounts: impl Iterator<Item = &'a BigDecimal>) -> Option<BigDecimal> {
    amounts.fold(None, |acc, amount| match acc {
        Some(total) => Some(total + amount),
        None => Some(amount.clone()),
    })
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn find_user(&self, credentials: &Credentials) -> RepositoryResult<bool> {
        self.record(Operation::FindUser)?;
        Ok(self
            .users
            .iter()
            .any(|(u, p)| *u == credentials.username && *p == credentials.password))
    }

    async fn list_stock(&self) -> RepositoryResult<Vec<StockItem>> {
        self.record(Operation::ListStock)?;
        Ok(self.stock.clone())
    }

    async fn list_low_stock(&self, threshold: u32) -> RepositoryResult<Vec<StockItem>> {
        self.record(Operation::ListLowStock)?;
        Ok(self
            .stock
            .iter()
            .filter(|item| item.quantity < threshold)
            .cloned()
            .collect())
    }

    async fn list_supplier_transactions(&self) -> RepositoryResult<Vec<SupplierTransaction>> {
        self.record(Operation::ListSupplierTransactions)?;
        Ok(self.supplier_transactions.clone())
    }

    async fn list_customer_transactions(&self) -> RepositoryResult<Vec<CustomerTransaction>> {
        self.record(Operation::ListCustomerTransactions)?;
        Ok(self.customer_transactions.clone())
    }

    async fn list_pending_supplier_transactions(
        &self,
        before: NaiveDate,
    ) -> RepositoryResult<Vec<SupplierTransaction>> {
        self.record(Operation::ListPendingSupplierTransactions)?;
        Ok(self
            .supplier_transactions
            .iter()
            .filter(|tx| tx.payment_status == PaymentStatus::Pending && tx.date < before)
            .cloned()
            .collect())
    }

    async fn list_pending_customer_transactions(
        &self,
        before: NaiveDate,
    ) -> RepositoryResult<Vec<CustomerTransaction>> {
        self.record(Operation::ListPendingCustomerTransactions)?;
        Ok(self
            .customer_transactions
            .iter()
            .filter(|tx| tx.payment_status == PaymentStatus::Pending && tx.date < before)
            .cloned()
            .collect())
    }

    async fn financial_summary(&self) -> RepositoryResult<FinancialSummary> {
        self.record(Operation::FinancialSummary)?;
        Ok(FinancialSummary {
            total_purchases: sum(self.supplier_transactions.iter().map(|tx| &tx.amount)),
            total_sales: sum(self.customer_transactions.iter().map(|tx| &tx.amount)),
        })
    }

    async fn ping(&self) -> RepositoryResult<()> {
        self.record(Operation::Ping)
    }
}
