#![allow(dead_code)]

use std::sync::Arc;

use api_client::ApiClient;
use lineup_auth::config::{AuthConfig, HashConfig};
use lineup_models::memory::MemoryStore;
use lineup_web::{router::router, state::AppState};
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};

pub mod api_client;

pub const TEST_SECRET: &str = "integration-test-secret";

/// A server on an ephemeral port, backed by a fresh [`MemoryStore`].
pub struct TestContext {
    pub api: ApiClient,
    pub store: MemoryStore,
    handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn spawn() -> Self {
        let store = MemoryStore::new();
        let config = AuthConfig::new(
            TEST_SECRET,
            HashConfig {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
        );
        let state =
            AppState::new(Arc::new(store.clone()), &config).expect("Failed to build app state");
        let app = router(state, None);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            api: ApiClient::new(format!("http://{addr}")),
            store,
            handle,
        }
    }

    pub fn cookie_client(&self) -> ApiClient {
        ApiClient::with_cookies(self.api.url.clone())
    }

    /// Registers `email` / `password` and returns the created user.
    pub async fn register(&self, email: &str, password: &str) -> Value {
        let response = self
            .api
            .post(
                "user",
                &json!({ "username": "tester", "email": email, "password": password }),
                None,
            )
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Couldn't parse user")
    }

    /// Registers a user and returns a token for it.
    pub async fn token(&self, email: &str) -> String {
        self.register(email, "Secret123").await;
        let response = self
            .api
            .post(
                "login",
                &json!({ "email": email, "password": "Secret123" }),
                None,
            )
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.expect("Couldn't parse login");
        body["token"]
            .as_str()
            .expect("Login without token")
            .to_string()
    }

    pub async fn create_side(&self, name: &str) -> Value {
        let response = self.api.post("side", &json!({ "name": name }), None).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Couldn't parse side")
    }

    pub async fn create_site(&self, name: &str) -> Value {
        let response = self.api.post("site", &json!({ "name": name }), None).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Couldn't parse site")
    }

    /// A lineup body referencing a freshly created side and site.
    pub async fn lineup_body(&self, name: &str) -> Value {
        let side = self.create_side("Attack").await;
        let site = self.create_site("A").await;
        json!({
            "name": name,
            "sideId": side["id"],
            "agent": "Sova",
            "roleId": uuid::Uuid::new_v4(),
            "siteId": site["id"],
            "map": "Ascent",
        })
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Couldn't parse error body");
    body["message"]
        .as_str()
        .expect("Error body without message")
        .to_string()
}
