// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use thm_roast::error::AppError;
use thm_roast::services::GenerationError;

#[test]
fn test_error_statuses() {
    assert_eq!(AppError::MissingUsername.status(), StatusCode::BAD_REQUEST);
    assert_eq!(AppError::UserNotFound.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        AppError::ActivityUnavailable.status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::Upstream("JSON parse error".to_string()).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::from(GenerationError::Empty).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_body_has_only_error_field() {
    let response = AppError::from(GenerationError::Blocked("SAFETY".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "error": "Roast generation failed: prompt blocked: SAFETY" })
    );
}
