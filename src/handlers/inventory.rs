use axum::{extract::State, Json};

use crate::domain::{CustomerTransaction, FinancialSummary, StockItem, SupplierTransaction};
use crate::error::AppError;
use crate::AppState;

pub async fn list_stocks(State(state): State<AppState>) -> Result<Json<Vec<StockItem>>, AppError> {
    let stock = state
        .repo
        .list_stock()
        .await
        .map_err(AppError::data("Error fetching stocks"))?;

    Ok(Json(stock))
}

pub async fn list_supplier_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SupplierTransaction>>, AppError> {
    let transactions = state
        .repo
        .list_supplier_transactions()
        .await
        .map_err(AppError::data("Error fetching supplier transactions"))?;

    Ok(Json(transactions))
}

pub async fn list_customer_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerTransaction>>, AppError> {
    let transactions = state
        .repo
        .list_customer_transactions()
        .await
        .map_err(AppError::data("Error fetching customer transactions"))?;

    Ok(Json(transactions))
}

/// Purchase and sales totals as a single object.
pub async fn financial_report(
    State(state): State<AppState>,
) -> Result<Json<FinancialSummary>, AppError> {
    let summary = state
        .repo
        .financial_summary()
        .await
        .map_err(AppError::data("Error generating reports"))?;

    Ok(Json(summary))
}
