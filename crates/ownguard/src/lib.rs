//! Top-level facade crate for ownguard.
//!
//! Re-exports the data model and the policy engine so hosts can depend on a single crate.

pub mod core {
    pub use ownguard_core::*;
}

pub mod policy {
    pub use ownguard_policy::*;
}
