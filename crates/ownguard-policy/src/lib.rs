//! ownguard policy library entry.
//!
//! This crate wires the ownership engine, its store/actor collaborators, the
//! lifecycle dispatch table, and the configuration loader into one unit a host
//! can register on its request pipeline.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod dispatch;
pub mod policy;
pub mod store;

pub use config::PolicyConfig;
pub use dispatch::{Dispatcher, Hook, HookOutcome, LifecycleStage, Operation};
pub use policy::{Denial, DenialFactory, DenialKind, PolicyDecision, PolicyEngine, StandardDenials};
pub use store::{DocumentReader, MemoryReader, ReadError};
