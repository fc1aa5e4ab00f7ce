// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod gemini;
pub mod profile;
pub mod prompt;
pub mod roast;
pub mod thm;

pub use activity::ActivityResolver;
pub use gemini::{GeminiClient, GenerationError, TextGenerator};
pub use prompt::{PromptError, RoastPrompt};
pub use roast::{RoastResponse, RoastService};
pub use thm::{ProfileApi, ThmClient, UpstreamError};
