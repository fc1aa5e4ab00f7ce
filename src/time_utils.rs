// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time.

use chrono::{Datelike, Utc};

/// Current calendar year (UTC).
pub fn current_year() -> i32 {
    Utc::now().year()
}
