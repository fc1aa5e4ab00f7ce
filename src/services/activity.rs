// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Yearly activity lookup with identifier fallback.
//!
//! The platform keys yearly activity by either the opaque `_id` or the
//! numeric `id` depending on the account, so the lookup is:
//! 1. `_id` with the current year
//! 2. on any failure, once more with the numeric id and the fallback year
//!
//! There is never a third attempt.

use crate::error::{AppError, Result};
use crate::models::{ActivityRecord, IdScheme, ProfileRecord};
use crate::services::thm::{ProfileApi, UpstreamError};

/// Resolves yearly activity for a profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityResolver {
    /// Year for the numeric-id retry; `None` reuses the current year.
    fallback_year: Option<i32>,
}

impl ActivityResolver {
    pub fn new(fallback_year: Option<i32>) -> Self {
        Self { fallback_year }
    }

    /// Year used by the retry when the current year is `current_year`.
    pub fn fallback_year(&self, current_year: i32) -> i32 {
        self.fallback_year.unwrap_or(current_year)
    }

    /// Fetch the activity record, falling back to the numeric id once.
    pub async fn resolve(
        &self,
        api: &dyn ProfileApi,
        profile: &ProfileRecord,
        current_year: i32,
    ) -> Result<ActivityRecord> {
        let primary = api
            .fetch_yearly_activity(&profile.primary_id, current_year)
            .await;

        let error = match primary {
            Ok(document) => {
                return Ok(ActivityRecord::from_document(
                    document,
                    current_year,
                    IdScheme::Primary,
                ))
            }
            Err(UpstreamError::Decode(msg)) => return Err(AppError::Upstream(msg)),
            Err(e) => e,
        };

        tracing::warn!(
            user = %profile.primary_id,
            year = current_year,
            error = %error,
            "Yearly activity lookup by primary id failed"
        );

        let Some(numeric_id) = profile.numeric_id.as_ref() else {
            tracing::error!(
                user = %profile.primary_id,
                "Profile has no numeric id to retry yearly activity with"
            );
            return Err(AppError::ActivityUnavailable);
        };

        let year = self.fallback_year(current_year);
        let user = numeric_id.to_string();
        match api.fetch_yearly_activity(&user, year).await {
            Ok(document) => Ok(ActivityRecord::from_document(
                document,
                year,
                IdScheme::Numeric,
            )),
            Err(UpstreamError::Decode(msg)) => Err(AppError::Upstream(msg)),
            Err(e) => {
                tracing::error!(
                    user = %user,
                    year,
                    error = %e,
                    "Yearly activity lookup by numeric id failed"
                );
                Err(AppError::ActivityUnavailable)
            }
        }
    }
}
