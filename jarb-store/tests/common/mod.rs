//! Shared test helpers for store tests.

#![allow(dead_code)]

use async_trait::async_trait;
use jarb_store::{ConstraintsFetcher, FetchResponse, StoreError, StoreResult};
use serde_json::{json, Value};
use std::sync::Mutex;

/// Installs a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Answers every fetch with a canned outcome and records the requested URLs.
pub struct StubFetcher {
    outcome: Result<Value, String>,
    pub requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn answering(data: Value) -> Self {
        Self {
            outcome: Ok(data),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConstraintsFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> StoreResult<FetchResponse> {
        self.requested.lock().unwrap().push(url.to_string());
        match &self.outcome {
            Ok(data) => Ok(FetchResponse {
                url: url.to_string(),
                status: 200,
                data: data.clone(),
            }),
            Err(message) => Err(StoreError::Transport(message.clone())),
        }
    }
}

/// A constraints payload with a few `Hero` properties.
pub fn hero_payload() -> Value {
    json!({
        "Hero": {
            "name": {
                "javaType": "java.lang.String",
                "types": ["text"],
                "required": true,
                "minimumLength": 5,
                "maximumLength": 50,
                "name": "name"
            },
            "favoriteNumber": {
                "javaType": "java.lang.Integer",
                "types": ["number"],
                "min": 42,
                "max": 1337,
                "name": "favoriteNumber"
            }
        }
    })
}
