use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the energy-balance core and its HTTP surface.
///
/// The core recovers nothing locally: every failure is terminal for the
/// triggering operation and reaches the caller as one of these kinds.
#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown user {0}")]
    UnknownUser(Uuid),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("backend read failed")]
    AggregationRead(#[source] anyhow::Error),

    #[error("backend write failed")]
    Persistence(#[source] anyhow::Error),
}

impl IntoResponse for BalanceError {
    fn into_response(self) -> Response {
        let status = match &self {
            BalanceError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BalanceError::UnknownUser(_) | BalanceError::NotFound(_) => StatusCode::NOT_FOUND,
            BalanceError::AggregationRead(_) | BalanceError::Persistence(_) => {
                StatusCode::BAD_GATEWAY
            }
        };

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }

        (status, self.to_string()).into_response()
    }
}
