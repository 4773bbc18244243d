//! Dispatch module exports.
//!
//! Re-exports the lifecycle stage table and the dispatcher so hosts can
//! register the engine on their event pipeline from one place.

pub mod dispatcher;
pub mod stage;

pub use dispatcher::{Dispatcher, Hook, HookOutcome};
pub use stage::{operation_for, LifecycleStage, Operation};
