// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! THM Roast API Server
//!
//! Looks up a TryHackMe user's public stats and asks Gemini to roast them.

use anyhow::Context;
use std::sync::Arc;
use thm_roast::{
    config::Config,
    services::{ActivityResolver, GeminiClient, RoastPrompt, RoastService, ThmClient},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment; a missing Gemini key stops here
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(port = config.port, "Starting THM Roast API");

    let prompt = match &config.roast_prompt_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading roast prompt template");
            RoastPrompt::from_file(path).context("Failed to load roast prompt template")?
        }
        None => RoastPrompt::default(),
    };

    let platform = Arc::new(ThmClient::new(config.thm_api_base_url.clone()));
    let generator = Arc::new(GeminiClient::new(
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
        config.gemini_api_key.clone(),
    ));
    tracing::info!(
        model = %config.gemini_model,
        fallback_year = ?config.activity_fallback_year,
        "Upstream clients initialized"
    );

    let roast_service = RoastService::new(
        platform,
        generator,
        prompt,
        ActivityResolver::new(config.activity_fallback_year),
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        roast_service,
    });

    // Build router
    let app = thm_roast::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("thm_roast=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
