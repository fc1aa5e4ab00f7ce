// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod profile;
pub mod stats;

mod lenient;

pub use activity::{ActivityDocument, ActivityRecord, IdScheme};
pub use profile::{ProfileDocument, ProfileRecord, UserId};
pub use stats::{NormalizedStats, DEFAULT_AVATAR_URL, DEFAULT_RANK};
