use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::ports::RepositoryError;
use crate::services::AlertsError;

#[derive(Error, Debug)]
pub enum AppError {
    /// A query failed; `context` is the short message shown to the client.
    #[error("{context}: {source}")]
    Data {
        context: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl AppError {
    pub fn data(context: &'static str) -> impl FnOnce(RepositoryError) -> AppError {
        move |source| AppError::Data { context, source }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Data { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &str {
        match self {
            AppError::Data { context, .. } => context,
        }
    }
}

impl From<AlertsError> for AppError {
    fn from(err: AlertsError) -> Self {
        AppError::Data {
            context: err.step.failure_message(),
            source: err.source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let status = self.status_code();
        (status, self.public_message().to_string()).into_response()
    }
}
