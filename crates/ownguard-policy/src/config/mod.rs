//! Engine config loader.
//!
//! Options are a flat mapping merged over defaults. Unlike a strict schema,
//! unknown keys are kept aside and ignored so hosts can share one option map
//! between several plugins.

pub mod schema;

use std::fs;

use serde_json::{Map, Value};

use ownguard_core::error::{PolicyError, Result};

pub use schema::PolicyConfig;

pub fn load_from_file(path: &str) -> Result<PolicyConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PolicyError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PolicyConfig> {
    let cfg: PolicyConfig = if s.trim().is_empty() {
        PolicyConfig::default()
    } else {
        serde_yaml::from_str(s).map_err(|e| PolicyError::Config(format!("invalid yaml: {e}")))?
    };
    finish(cfg)
}

/// Build a config from an already-parsed host option map.
pub fn from_options(options: Map<String, Value>) -> Result<PolicyConfig> {
    let cfg: PolicyConfig = serde_json::from_value(Value::Object(options))
        .map_err(|e| PolicyError::Config(format!("invalid options: {e}")))?;
    finish(cfg)
}

fn finish(cfg: PolicyConfig) -> Result<PolicyConfig> {
    cfg.validate()?;
    for key in cfg.ignored.keys() {
        tracing::debug!(option = %key, "ignoring unknown config option");
    }
    Ok(cfg)
}
