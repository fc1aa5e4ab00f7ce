// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! The Gemini credential is validated here so that a misconfigured process
//! fails before it binds a listener.

use secrecy::SecretString;
use std::env;
use std::path::PathBuf;

const DEFAULT_THM_API_BASE_URL: &str = "https://tryhackme.com/api/v2";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Base URL of the TryHackMe v2 API
    pub thm_api_base_url: String,
    /// Base URL of the Gemini REST API
    pub gemini_base_url: String,
    /// Gemini model name
    pub gemini_model: String,
    /// Year used for the numeric-id activity retry. `None` means the current year.
    pub activity_fallback_year: Option<i32>,
    /// Optional file replacing the built-in roast prompt template
    pub roast_prompt_file: Option<PathBuf>,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,

    // --- Secrets ---
    /// Gemini API key
    pub gemini_api_key: SecretString,
}

impl Config {
    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            thm_api_base_url: "http://127.0.0.1:9".to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            activity_fallback_year: Some(2025),
            roast_prompt_file: None,
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            gemini_api_key: SecretString::new("test_gemini_key".to_string()),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map(|v| v.trim().to_string())
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let activity_fallback_year = match env::var("ACTIVITY_FALLBACK_YEAR") {
            Ok(raw) if !raw.trim().is_empty() => Some(raw.trim().parse::<i32>().map_err(|_| {
                ConfigError::Invalid {
                    name: "ACTIVITY_FALLBACK_YEAR",
                    value: raw.clone(),
                }
            })?),
            _ => None,
        };

        Ok(Self {
            thm_api_base_url: env::var("THM_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_THM_API_BASE_URL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            activity_fallback_year,
            roast_prompt_file: env::var("ROAST_PROMPT_FILE").ok().map(PathBuf::from),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            gemini_api_key: SecretString::new(gemini_api_key),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
