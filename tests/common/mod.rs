//! Common test utilities and helpers
//!
//! Every `TestApp` owns a fresh in-memory database, so tests never share
//! state and can run in parallel.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use calendar_backend::backend::routes::create_router;
use calendar_backend::backend::server::{build_state, AppState, ServerConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router plus the state behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Response status and parsed JSON body (`Value::Null` when empty)
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = ServerConfig::builder()
            .database_url("sqlite::memory:")
            .jwt_secret(TEST_SECRET)
            .bcrypt_cost(4)
            .build()
            .expect("test config");

        let state = build_state(&config).await.expect("test state");
        let router = create_router(state.clone());

        Self { router, state }
    }

    /// Send a request, optionally with a JSON body and a bearer token
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }

    pub async fn post(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.send(Method::POST, uri, Some(body), token).await
    }

    pub async fn put(&self, uri: &str, body: Value, token: &str) -> TestResponse {
        self.send(Method::PUT, uri, Some(body), Some(token)).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, None, token).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None, Some(token)).await
    }

    /// Sign up a user and return their access token
    pub async fn signup(&self, username: &str) -> String {
        let response = self
            .post(
                "/api/auth/signup",
                serde_json::json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "password": "secret1",
                }),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "signup failed: {}", response.body);
        response.body["token"]["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
