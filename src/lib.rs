// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! THM Roast: roast TryHackMe users from their public statistics
//!
//! This crate provides the backend API that aggregates a user's public
//! TryHackMe profile and yearly activity into a normalized stats record and
//! asks a generative model to roast them.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::RoastService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub roast_service: RoastService,
}
