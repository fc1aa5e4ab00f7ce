// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roast route.

use crate::error::{AppError, Result};
use crate::services::RoastResponse;
use crate::time_utils::current_year;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Roast routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/roast", get(roast))
}

#[derive(Deserialize)]
struct RoastQuery {
    username: Option<String>,
}

/// Require a non-blank username.
fn validate_username(username: Option<&str>) -> Result<&str> {
    username
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(AppError::MissingUsername)
}

/// Fetch a user's stats and roast them.
async fn roast(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RoastQuery>,
) -> Result<Json<RoastResponse>> {
    let username = validate_username(params.username.as_deref())?;

    let response = state
        .roast_service
        .roast(username, current_year())
        .await?;

    Ok(Json(response))
}
