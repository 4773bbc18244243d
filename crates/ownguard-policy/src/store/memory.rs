use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use ownguard_core::model::{Document, ResourceLocator};

use super::{DocumentReader, ReadError};

/// In-process document map: `(index, collection, id) -> Document`.
///
/// Counts every read so embedders can check round-trip budgets.
#[derive(Default)]
pub struct MemoryReader {
    docs: DashMap<(String, String, String), Document>,
    reads: AtomicUsize,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self {
            docs: DashMap::new(),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn insert(&self, index: &str, collection: &str, doc: Document) {
        self.docs
            .insert((index.to_string(), collection.to_string(), doc.id.clone()), doc);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DocumentReader for MemoryReader {
    async fn read(&self, locator: &ResourceLocator) -> Result<Document, ReadError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        let id = locator.document_id.as_deref().ok_or(ReadError::NotFound)?;
        let key = (locator.index.clone(), locator.collection.clone(), id.to_string());
        self.docs
            .get(&key)
            .map(|e| e.value().clone())
            .ok_or(ReadError::NotFound)
    }
}
