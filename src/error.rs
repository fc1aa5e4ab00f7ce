// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::services::gemini::GenerationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Username is required")]
    MissingUsername,

    #[error("user not found or upstream error")]
    UserNotFound,

    #[error("failed to fetch yearly activity with either id")]
    ActivityUnavailable,

    #[error("TryHackMe API error: {0}")]
    Upstream(String),

    #[error("Roast generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl AppError {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingUsername => StatusCode::BAD_REQUEST,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::ActivityUnavailable
            | AppError::Upstream(_)
            | AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %error, "Roast request failed");
        } else {
            tracing::info!(status = status.as_u16(), error = %error, "Roast request rejected");
        }

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
