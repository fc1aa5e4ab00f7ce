// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Yearly activity document returned by the TryHackMe API.

use super::lenient;
use serde::Deserialize;

/// Raw `GET /public-profile/yearly-activity` response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityDocument {
    #[serde(default, deserialize_with = "lenient::object")]
    pub data: Option<ActivityData>,
}

/// The `data` object of a yearly activity document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_count: Option<u64>,
}

/// Which identifier scheme answered the activity lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScheme {
    /// Opaque `_id` with the current year
    Primary,
    /// Numeric `id` with the fallback year
    Numeric,
}

impl IdScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdScheme::Primary => "primary",
            IdScheme::Numeric => "numeric",
        }
    }
}

/// Yearly activity resolved for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    /// Total events in `year`, absent if the document did not carry one
    pub total_count: Option<u64>,
    /// Year the count belongs to
    pub year: i32,
    pub scheme: IdScheme,
}

impl ActivityRecord {
    pub fn from_document(document: ActivityDocument, year: i32, scheme: IdScheme) -> Self {
        Self {
            total_count: document.data.and_then(|d| d.total_count),
            year,
            scheme,
        }
    }
}
