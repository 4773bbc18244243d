//! ownguard core: document-ownership data model, query builders, and errors.
//!
//! This crate defines the request/document shapes and the error surface shared
//! by the policy engine and by hosts embedding it. It carries no runtime or
//! storage dependencies so it can be reused on both sides of a host boundary.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PolicyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod query;

/// Shared result type.
pub use error::{BackendError, ErrorCode, PolicyError, Result};
pub use model::{
    Action, Actor, ActorContext, Document, DocumentMetadata, MultiGetItem, Request,
    ResourceLocator, ResultSet, ANONYMOUS_ID,
};
