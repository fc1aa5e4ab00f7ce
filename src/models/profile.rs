// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public profile document returned by the TryHackMe API.

use super::lenient;
use serde::Deserialize;
use std::fmt;

/// Secondary user identifier. The API sends it as a number for most
/// accounts and as a string for some migrated ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Numeric(id) => write!(f, "{}", id),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

/// Raw `GET /public-profile` response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileDocument {
    #[serde(default, deserialize_with = "lenient::object")]
    pub data: Option<ProfileData>,
}

/// The `data` object of a profile document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(rename = "_id", default, deserialize_with = "lenient::text")]
    pub primary_id: Option<String>,
    #[serde(rename = "id", default, deserialize_with = "lenient::user_id")]
    pub numeric_id: Option<UserId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub rank: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub completed_rooms_number: Option<u64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub streak: Option<u64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub badges_number: Option<u64>,
    #[serde(default, alias = "rankPercentage", deserialize_with = "lenient::number")]
    pub top_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub avatar: Option<String>,
}

/// A recognized profile: the document had a `data` object and a primary id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    /// Opaque id used by the primary activity query
    pub primary_id: String,
    /// Alternate id used by the fallback activity query
    pub numeric_id: Option<UserId>,
    pub rank: Option<String>,
    pub rooms_solved: Option<u64>,
    pub streak: Option<u64>,
    pub badges: Option<u64>,
    pub rank_percentile: Option<f64>,
    pub avatar_url: Option<String>,
}

impl ProfileDocument {
    /// Extract the profile record.
    ///
    /// Returns `None` when the document has no `data` section or no primary
    /// id, which callers treat the same as an unknown user.
    pub fn into_record(self) -> Option<ProfileRecord> {
        let data = self.data?;
        let primary_id = data.primary_id?;

        Some(ProfileRecord {
            primary_id,
            numeric_id: data.numeric_id,
            rank: data.rank,
            rooms_solved: data.completed_rooms_number,
            streak: data.streak,
            badges: data.badges_number,
            rank_percentile: data.top_percentage,
            avatar_url: data.avatar,
        })
    }
}
