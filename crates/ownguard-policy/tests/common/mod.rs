//! Shared fixtures for engine and dispatcher tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use ownguard_core::model::{Actor, Document, ResourceLocator};
use ownguard_policy::{DocumentReader, MemoryReader, PolicyConfig, PolicyEngine, ReadError};

pub const INDEX: &str = "shop";
pub const COLLECTION: &str = "orders";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn user(id: &str) -> Actor {
    Actor::new(id, ["default"])
}

pub fn admin() -> Actor {
    Actor::new("root", ["default", "admin"])
}

pub fn doc(id: &str, author: &str) -> Document {
    Document::new(id, author, json!({"title": format!("doc {id}")}))
}

pub fn locator(id: &str) -> ResourceLocator {
    ResourceLocator::document(INDEX, COLLECTION, id)
}

/// Memory reader seeded with `(id, author)` pairs.
pub fn seeded(docs: &[(&str, &str)]) -> Arc<MemoryReader> {
    init_tracing();
    let reader = Arc::new(MemoryReader::new());
    for (id, author) in docs {
        reader.insert(INDEX, COLLECTION, doc(id, author));
    }
    reader
}

pub fn engine(reader: Arc<MemoryReader>) -> PolicyEngine {
    PolicyEngine::new(PolicyConfig::default(), reader).unwrap()
}

#[derive(Debug)]
pub struct Unavailable;

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("store unavailable")
    }
}

impl std::error::Error for Unavailable {}

/// Reader whose every call fails with a backend error.
#[derive(Default)]
pub struct FailingReader {
    pub calls: AtomicUsize,
}

#[async_trait]
impl DocumentReader for FailingReader {
    async fn read(&self, _locator: &ResourceLocator) -> Result<Document, ReadError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Err(ReadError::backend(Unavailable))
    }
}
