use axum::{extract::State, Json};
use chrono::Utc;

use crate::domain::AlertsReport;
use crate::error::AppError;
use crate::AppState;

pub async fn get_alerts(State(state): State<AppState>) -> Result<Json<AlertsReport>, AppError> {
    let report = state.alerts.build_report(Utc::now()).await?;
    Ok(Json(report))
}
