use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::domain::Credentials;
use crate::error::AppError;
use crate::AppState;

pub const INVALID_CREDENTIALS_SCRIPT: &str = r#"<script>
    alert('Invalid username or password');
    window.location.href = '/login';
</script>"#;

/// Exact-match credential check against the `Users` table.
///
/// A mismatch is a normal outcome: the browser gets an alert and is sent
/// back to the login page with a 200.
pub async fn login(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> Result<Response, AppError> {
    let matched = state
        .repo
        .find_user(&credentials)
        .await
        .map_err(AppError::data("Error validating credentials"))?;

    if matched {
        tracing::info!(username = %credentials.username, "Login succeeded");
        Ok(Redirect::to("/dashboard").into_response())
    } else {
        tracing::warn!(username = %credentials.username, "Login rejected");
        Ok(Html(INVALID_CREDENTIALS_SCRIPT).into_response())
    }
}
