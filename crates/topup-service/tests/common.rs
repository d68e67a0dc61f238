//! Common test utilities for topup-service integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use topup_service::{create_router, AppState, ServiceConfig};
use topup_store::{seed_catalog, MemStore};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Direct handle on the backing store, for fixture setup.
    pub store: Arc<MemStore>,
}

impl TestHarness {
    /// Create a new test harness with the built-in catalog seeded.
    pub async fn new() -> Self {
        let harness = Self::new_empty();
        seed_catalog(harness.store.as_ref())
            .await
            .expect("Failed to seed catalog");
        harness
    }

    /// Create a new test harness with an empty store.
    pub fn new_empty() -> Self {
        let store = Arc::new(MemStore::new());

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            database_url: "postgres://unused".into(),
            seed_catalog: false,
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(store.clone(), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, store }
    }
}
