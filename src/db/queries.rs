use chrono::NaiveDate;
use sqlx::{PgPool, Result};

use crate::db::models::{CustomerTransactionRow, StockRow, SummaryRow, SupplierTransactionRow};
use crate::domain::PaymentStatus;

// --- User Queries ---

pub async fn user_exists(pool: &PgPool, username: &str, password: &str) -> Result<bool> {
    let row: Option<i32> =
        sqlx::query_scalar("SELECT 1 FROM Users WHERE username = $1 AND password = $2 LIMIT 1")
            .bind(username)
            .bind(password)
            .fetch_optional(pool)
            .await?;

    Ok(row.is_some())
}

// --- Stock Queries ---

pub async fn list_stock(pool: &PgPool) -> Result<Vec<StockRow>> {
    sqlx::query_as::<_, StockRow>(
        "SELECT id, name, quantity, unit_price, updated_at FROM Stock ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_stock_below(pool: &PgPool, threshold: u32) -> Result<Vec<StockRow>> {
    sqlx::query_as::<_, StockRow>(
        r#"
        SELECT id, name, quantity, unit_price, updated_at
        FROM Stock
        WHERE quantity < $1
        ORDER BY id
        "#,
    )
    .bind(i64::from(threshold))
    .fetch_all(pool)
    .await
}

// --- Transaction Queries ---

pub async fn list_supplier_transactions(pool: &PgPool) -> Result<Vec<SupplierTransactionRow>> {
    sqlx::query_as::<_, SupplierTransactionRow>(
        "SELECT id, supplier_id, amount, payment_status, date FROM SupplierTransactions ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_customer_transactions(pool: &PgPool) -> Result<Vec<CustomerTransactionRow>> {
    sqlx::query_as::<_, CustomerTransactionRow>(
        "SELECT id, customer_id, amount, payment_status, date FROM CustomerTransactions ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_supplier_transactions_with_status_before(
    pool: &PgPool,
    status: PaymentStatus,
    before: NaiveDate,
) -> Result<Vec<SupplierTransactionRow>> {
    sqlx::query_as::<_, SupplierTransactionRow>(
        r#"
        SELECT id, supplier_id, amount, payment_status, date
        FROM SupplierTransactions
        WHERE payment_status = $1
        AND date < $2
        ORDER BY id
        "#,
    )
    .bind(status.as_str())
    .bind(before)
    .fetch_all(pool)
    .await
}

pub async fn list_customer_transactions_with_status_before(
    pool: &PgPool,
    status: PaymentStatus,
    before: NaiveDate,
) -> Result<Vec<CustomerTransactionRow>> {
    sqlx::query_as::<_, CustomerTransactionRow>(
        r#"
        SELECT id, customer_id, amount, payment_status, date
        FROM CustomerTransactions
        WHERE payment_status = $1
        AND date < $2
        ORDER BY id
        "#,
    )
    .bind(status.as_str())
    .bind(before)
    .fetch_all(pool)
    .await
}

// --- Report Queries ---

pub async fn financial_summary(pool: &PgPool) -> Result<SummaryRow> {
    sqlx::query_as::<_, SummaryRow>(
        r#"
        SELECT
            (SELECT SUM(amount) FROM SupplierTransactions) AS total_purchases,
            (SELECT SUM(amount) FROM CustomerTransactions) AS total_sales
        "#,
    )
    .fetch_one(pool)
    .await
}

pub async fn ping(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
