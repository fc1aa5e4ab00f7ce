// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thm_roast::config::Config;
use thm_roast::models::{ActivityDocument, ProfileDocument};
use thm_roast::routes::create_router;
use thm_roast::services::{
    ActivityResolver, GenerationError, ProfileApi, RoastPrompt, RoastService, TextGenerator,
    UpstreamError,
};
use thm_roast::AppState;

/// Scripted upstream reply.
#[derive(Clone)]
#[allow(dead_code)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Transport,
}

impl Reply {
    fn into_document<T: serde::de::DeserializeOwned>(self) -> Result<T, UpstreamError> {
        match self {
            Reply::Json(value) => {
                serde_json::from_value(value).map_err(|e| UpstreamError::Decode(e.to_string()))
            }
            Reply::Status(status) => Err(UpstreamError::Status {
                status,
                body: "{\"message\":\"scripted failure\"}".to_string(),
            }),
            Reply::Transport => Err(UpstreamError::Transport("connection refused".to_string())),
        }
    }
}

/// In-process TryHackMe API that replays scripted replies and records calls.
#[derive(Default)]
pub struct FakePlatform {
    profile: Mutex<Option<Reply>>,
    activity: Mutex<VecDeque<Reply>>,
    profile_calls: Mutex<Vec<String>>,
    activity_calls: Mutex<Vec<(String, i32)>>,
}

#[allow(dead_code)]
impl FakePlatform {
    pub fn new(profile: Reply, activity: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            profile: Mutex::new(Some(profile)),
            activity: Mutex::new(activity.into()),
            ..Default::default()
        })
    }

    /// A platform that must never be called.
    pub fn untouched() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn profile_calls(&self) -> Vec<String> {
        self.profile_calls.lock().unwrap().clone()
    }

    pub fn activity_calls(&self) -> Vec<(String, i32)> {
        self.activity_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileApi for FakePlatform {
    async fn fetch_profile(&self, username: &str) -> Result<ProfileDocument, UpstreamError> {
        self.profile_calls
            .lock()
            .unwrap()
            .push(username.to_string());
        let reply = self.profile.lock().unwrap().take();
        reply.expect("unexpected profile call").into_document()
    }

    async fn fetch_yearly_activity(
        &self,
        user: &str,
        year: i32,
    ) -> Result<ActivityDocument, UpstreamError> {
        self.activity_calls
            .lock()
            .unwrap()
            .push((user.to_string(), year));
        let reply = self.activity.lock().unwrap().pop_front();
        reply.expect("unexpected activity call").into_document()
    }
}

/// Generator that returns a fixed roast (or fails) and records prompts.
pub struct FakeGenerator {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeGenerator {
    pub fn roasting(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(GenerationError::Status {
            status: 503,
            body: "model overloaded".to_string(),
        })
    }
}

/// Create a test app against the given collaborators.
/// The activity fallback year is 2025 (from `Config::test_default`).
#[allow(dead_code)]
pub fn create_test_app(
    platform: Arc<dyn ProfileApi>,
    generator: Arc<dyn TextGenerator>,
) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let roast_service = RoastService::new(
        platform,
        generator,
        RoastPrompt::default(),
        ActivityResolver::new(config.activity_fallback_year),
    );

    let state = Arc::new(AppState {
        config,
        roast_service,
    });

    (create_router(state.clone()), state)
}

/// Profile used by the end-to-end scenarios.
#[allow(dead_code)]
pub fn elite_profile() -> Value {
    serde_json::json!({
        "status": "success",
        "data": {
            "_id": "abc",
            "id": 123,
            "rank": "Elite",
            "completedRoomsNumber": 50,
            "streak": 10,
            "badgesNumber": 5,
            "avatar": "http://x/y.png"
        }
    })
}

#[allow(dead_code)]
pub fn activity_count(total: u64) -> Value {
    serde_json::json!({ "data": { "totalCount": total } })
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
