// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roast pipeline.
//!
//! Handles the core workflow:
//! 1. Resolve the profile for a username
//! 2. Resolve yearly activity (with one identifier fallback)
//! 3. Normalize the stats
//! 4. Render the prompt and generate the roast

use crate::error::{AppError, Result};
use crate::models::NormalizedStats;
use crate::services::activity::ActivityResolver;
use crate::services::gemini::{GenerationError, TextGenerator};
use crate::services::profile::resolve_profile;
use crate::services::prompt::RoastPrompt;
use crate::services::thm::ProfileApi;
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Successful roast response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/generated/")
)]
pub struct RoastResponse {
    pub user_data: NormalizedStats,
    pub roast: String,
}

/// Runs the roast pipeline against the platform API and a text generator.
#[derive(Clone)]
pub struct RoastService {
    platform: Arc<dyn ProfileApi>,
    generator: Arc<dyn TextGenerator>,
    prompt: RoastPrompt,
    activity: ActivityResolver,
}

impl RoastService {
    pub fn new(
        platform: Arc<dyn ProfileApi>,
        generator: Arc<dyn TextGenerator>,
        prompt: RoastPrompt,
        activity: ActivityResolver,
    ) -> Self {
        Self {
            platform,
            generator,
            prompt,
            activity,
        }
    }

    /// Roast a user. `current_year` drives the primary activity lookup.
    pub async fn roast(&self, username: &str, current_year: i32) -> Result<RoastResponse> {
        tracing::info!(username, "Roasting user");

        let profile = resolve_profile(self.platform.as_ref(), username).await?;
        let activity = self
            .activity
            .resolve(self.platform.as_ref(), &profile, current_year)
            .await?;

        let user_data = NormalizedStats::from_records(&profile, &activity);
        tracing::info!(
            username,
            scheme = activity.scheme.as_str(),
            year = activity.year,
            events = user_data.events,
            "Stats normalized"
        );

        let prompt = self.prompt.render(&user_data, activity.year);
        let roast = self.generator.generate(&prompt).await?;
        if roast.trim().is_empty() {
            return Err(AppError::Generation(GenerationError::Empty));
        }

        Ok(RoastResponse { user_data, roast })
    }
}
