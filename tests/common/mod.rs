//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use contact_api::config::AppConfig;
use contact_api::domain::ContactSubmission;
use contact_api::http::HttpServer;
use contact_api::lifecycle::Shutdown;
use contact_api::persistence::{StoreError, SubmissionStore};

/// In-memory store double recording every insert.
#[derive(Default, Clone)]
pub struct MemoryStore {
    pub records: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        self.records.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

/// Store double whose writes always fail, for the 500 path.
pub struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn insert(&self, _submission: &ContactSubmission) -> Result<(), StoreError> {
        Err(StoreError::Write(mongodb::error::Error::custom(
            "injected write failure".to_string(),
        )))
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        mongo_uri: "mongodb://localhost:27017".into(),
        database: "contact".into(),
        max_retries: 5,
        request_timeout_secs: 5,
    }
}

/// Start the service on an ephemeral port over the given store.
///
/// Returns the bound address and the shutdown handle; dropping the handle
/// closes the broadcast channel and stops the server, so keep it alive for
/// the duration of the test.
pub async fn spawn_app(store: Arc<dyn SubmissionStore>) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(&test_config(), store);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}
