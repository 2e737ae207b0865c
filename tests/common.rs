//! Common test utilities for the HTTP API tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use keydeck::{create_routes, KeyStore};

/// Test harness running the real router against an in-memory SQLite store.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Handle to the backing store connection.
    pub db: DatabaseConnection,
}

impl TestHarness {
    /// Create a new test harness with a fresh database.
    pub async fn new() -> Self {
        // A single pooled connection, so every query sees the same
        // in-memory database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);

        let db = Database::connect(options)
            .await
            .expect("Failed to open in-memory database");
        Migrator::up(&db, None).await.expect("Failed to run migrations");

        let store = KeyStore::new(db.clone());
        let router: Router = create_routes(store);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, db }
    }

    /// Close the backing store, simulating an unreachable database, and
    /// hand back the still-running server.
    pub async fn kill_store(self) -> TestServer {
        self.db.close().await.expect("Failed to close database");
        self.server
    }
}
