use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use ownguard_core::error::{PolicyError, Result};
use ownguard_core::ANONYMOUS_ID;

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Profile exempting an actor from every ownership check.
    #[serde(default = "default_admin_profile")]
    pub admin_profile: String,

    /// Actor id the host assigns to unauthenticated requests.
    #[serde(default = "default_anonymous_id")]
    pub anonymous_id: String,

    /// Dotted path of the author attribute in stored documents.
    #[serde(default = "default_author_field")]
    pub author_field: String,

    /// Wire the realtime subscription stage.
    #[serde(default)]
    pub filter_subscriptions: bool,

    /// Host options this engine does not know about.
    #[serde(flatten)]
    pub ignored: BTreeMap<String, Value>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            admin_profile: default_admin_profile(),
            anonymous_id: default_anonymous_id(),
            author_field: default_author_field(),
            filter_subscriptions: false,
            ignored: BTreeMap::new(),
        }
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("admin_profile", &self.admin_profile),
            ("anonymous_id", &self.anonymous_id),
            ("author_field", &self.author_field),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(PolicyError::Config(format!("{name} must not be empty")));
            }
        }
        if self.author_field.split('.').any(str::is_empty) {
            return Err(PolicyError::Config(format!(
                "author_field is not a valid dotted path: {}",
                self.author_field
            )));
        }
        Ok(())
    }
}

fn default_admin_profile() -> String {
    "admin".into()
}
fn default_anonymous_id() -> String {
    ANONYMOUS_ID.into()
}
fn default_author_field() -> String {
    "_kuzzle_info.author".into()
}
