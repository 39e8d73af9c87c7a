#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use shorturl::domain::entities::UrlRecord;
use shorturl::domain::repositories::UrlRepository;
use shorturl::domain::resolver::HostResolver;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::MemoryUrlRepository;
use shorturl::routes::build_router;
use shorturl::state::AppState;
use std::sync::Arc;

/// Hosts that [`StubResolver::default`] treats as resolvable.
pub const KNOWN_HOSTS: &[&str] = &["www.example.com", "example.com", "freecodecamp.org"];

/// Resolver answering from a fixed host list, so tests never touch the network.
pub struct StubResolver {
    known: Vec<String>,
}

impl StubResolver {
    pub fn new(known: &[&str]) -> Self {
        Self {
            known: known.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl Default for StubResolver {
    fn default() -> Self {
        Self::new(KNOWN_HOSTS)
    }
}

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolves(&self, host: &str) -> bool {
        self.known.iter().any(|known| known == host)
    }
}

/// Repository whose every operation fails like an unreachable database.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn insert_next(&self, _original_url: &str) -> Result<UrlRecord, AppError> {
        Err(AppError::Store("connection refused".to_string()))
    }

    async fn find_by_short_url(&self, _short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::Store("connection refused".to_string()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::Store("connection refused".to_string()))
    }

    async fn list(&self, _limit: i64, _offset: i64) -> Result<Vec<UrlRecord>, AppError> {
        Err(AppError::Store("connection refused".to_string()))
    }
}

/// State backed by an empty in-memory repository and [`StubResolver`].
pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(MemoryUrlRepository::new()),
        Arc::new(StubResolver::default()),
    )
}

/// State whose repository always fails.
pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingRepository), Arc::new(StubResolver::default()))
}

pub fn create_test_app(state: AppState) -> Router {
    build_router(state)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_app(state)).unwrap()
}

/// Submits `url` as a form field and returns the JSON body.
pub async fn submit(server: &TestServer, url: &str) -> serde_json::Value {
    let response = server.post("/api/shorturl").form(&[("url", url)]).await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()
}
