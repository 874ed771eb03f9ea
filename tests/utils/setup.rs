use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Map, Value};
use tower::ServiceExt; // for `oneshot`

use holdem_evaluator::{build_router, AppState, Config};

// ============================================================================
// Test Application
// ============================================================================

pub struct TestApp {
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: build_router(AppState::default(), &Config::default()),
        }
    }

    pub async fn evaluate(&self, body: Value) -> TestResponse {
        self.post_raw(&body.to_string()).await
    }

    pub async fn post_raw(&self, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri("/evaluate-hand")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
        }
    }
}

// ============================================================================
// Request Builders
// ============================================================================

pub struct HandsBuilder {
    hands: Map<String, Value>,
}

impl HandsBuilder {
    pub fn new() -> Self {
        Self { hands: Map::new() }
    }

    pub fn with_hand(mut self, name: &str, tokens: &[&str]) -> Self {
        self.hands.insert(name.to_string(), json!(tokens));
        self
    }

    pub fn build(self) -> Value {
        json!({ "hands": self.hands })
    }
}
