//! Ownership policy layer.
//!
//! Holds the four decision operations and the denial construction they share.

pub mod denial;
pub mod engine;

pub use denial::{Denial, DenialFactory, DenialKind, StandardDenials};
pub use engine::{PolicyDecision, PolicyEngine};
