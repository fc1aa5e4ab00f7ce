// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Normalized statistics exposed to the frontend and the roast prompt.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{ActivityRecord, ProfileRecord};

/// Rank shown for accounts without one.
pub const DEFAULT_RANK: &str = "Unranked";

/// Avatar shown for accounts without one.
pub const DEFAULT_AVATAR_URL: &str =
    "https://tryhackme-images.s3.amazonaws.com/default-avatar.png";

/// Fixed-shape stats record. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/generated/")
)]
pub struct NormalizedStats {
    pub rank: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub rooms_solved: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub streak: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub badges: u64,
    pub rank_percentage: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub events: u64,
    pub pfp: String,
}

impl NormalizedStats {
    /// Merge a profile and its yearly activity, defaulting missing fields.
    pub fn from_records(profile: &ProfileRecord, activity: &ActivityRecord) -> Self {
        Self {
            rank: profile
                .rank
                .clone()
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DEFAULT_RANK.to_string()),
            rooms_solved: profile.rooms_solved.unwrap_or(0),
            streak: profile.streak.unwrap_or(0),
            badges: profile.badges.unwrap_or(0),
            rank_percentage: profile.rank_percentile.unwrap_or(0.0),
            events: activity.total_count.unwrap_or(0),
            pfp: profile
                .avatar_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
        }
    }
}
