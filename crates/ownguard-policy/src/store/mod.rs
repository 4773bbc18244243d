//! Document store collaborators.
//!
//! The engine only ever reads, and only from `pre_mutation_check`.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use ownguard_core::error::BackendError;
use ownguard_core::model::{Document, ResourceLocator};

pub use memory::MemoryReader;

/// Outcome of a failed read.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("document not found")]
    NotFound,
    #[error(transparent)]
    Backend(BackendError),
}

impl ReadError {
    pub fn backend(e: impl Into<BackendError>) -> Self {
        ReadError::Backend(e.into())
    }
}

/// Read capability over the host document store.
#[async_trait]
pub trait DocumentReader: Send + Sync {
    /// `locator.document_id` is always set when called by the engine.
    async fn read(&self, locator: &ResourceLocator) -> Result<Document, ReadError>;
}
