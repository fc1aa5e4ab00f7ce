// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile lookup: username to profile record.

use crate::error::{AppError, Result};
use crate::models::ProfileRecord;
use crate::services::thm::{ProfileApi, UpstreamError};

/// Resolve a username to its profile record with a single lookup.
///
/// Any failed lookup is reported as an unknown user; typos are not worth
/// retrying. A successful response without a `data` section or primary id is
/// treated the same way.
pub async fn resolve_profile(api: &dyn ProfileApi, username: &str) -> Result<ProfileRecord> {
    let document = match api.fetch_profile(username).await {
        Ok(document) => document,
        Err(UpstreamError::Decode(msg)) => return Err(AppError::Upstream(msg)),
        Err(e) => {
            tracing::info!(username, error = %e, "Profile lookup failed");
            return Err(AppError::UserNotFound);
        }
    };

    let profile = document.into_record().ok_or_else(|| {
        tracing::info!(username, "Profile document has no user id");
        AppError::UserNotFound
    })?;

    tracing::debug!(
        username,
        primary_id = %profile.primary_id,
        numeric_id = ?profile.numeric_id,
        "Profile resolved"
    );
    Ok(profile)
}
