use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::models::ErrorResponse;

pub const NO_CHANNELS_FOUND: &str = "No channels found";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Every way a channel search can end without a result list. All variants are
/// terminal for the request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing apiKey or query")]
    MissingParams,

    /// The search call failed or had no `items`; carries the upstream message when
    /// one was sent.
    #[error("{0}")]
    UpstreamSearch(String),

    #[error("Failed to fetch channel details")]
    UpstreamDetail,

    /// Transport, timeout or decode failure talking to the upstream API.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParams | ApiError::UpstreamSearch(_) | ApiError::UpstreamDetail => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Upstream(e) => {
                // Details stay in the log; the caller only learns that it failed.
                tracing::error!(error = %e, "channel search failed");
                INTERNAL_ERROR.to_string()
            }
            other => {
                tracing::warn!(status = status.as_u16(), "channel search rejected: {other}");
                other.to_string()
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
