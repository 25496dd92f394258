//! Submission storage.

use async_trait::async_trait;
use mongodb::{Client, Collection};
use thiserror::Error;

use crate::domain::ContactSubmission;

/// Collection holding persisted submissions.
pub const COLLECTION_NAME: &str = "submissions";

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database write failed: {0}")]
    Write(#[from] mongodb::error::Error),
}

/// Write seam between the HTTP layer and the document store.
///
/// Submissions are insert-only: this system never updates or deletes them.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert(&self, submission: &ContactSubmission) -> Result<(), StoreError>;
}

/// MongoDB-backed store.
#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<ContactSubmission>,
}

impl MongoStore {
    pub fn new(client: &Client, database: &str) -> Self {
        Self {
            collection: client.database(database).collection(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl SubmissionStore for MongoStore {
    async fn insert(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        self.collection.insert_one(submission).await?;
        Ok(())
    }
}
