//! Request and document shapes seen by the ownership engine.
//!
//! Everything here is transient: the engine reads these values and returns new
//! ones, it never owns or persists them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default id the host assigns to requests without a session.
pub const ANONYMOUS_ID: &str = "-1";

/// Identity issuing a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    #[serde(default)]
    pub profiles: Vec<String>,
}

impl Actor {
    pub fn new(id: impl Into<String>, profiles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            profiles: profiles.into_iter().map(Into::into).collect(),
        }
    }

    /// Unauthenticated actor using the default sentinel id.
    pub fn anonymous() -> Self {
        Self {
            id: ANONYMOUS_ID.to_string(),
            profiles: vec!["anonymous".to_string()],
        }
    }

    pub fn has_profile(&self, profile: &str) -> bool {
        self.profiles.iter().any(|p| p == profile)
    }
}

/// Read-only accessor for the actor bound to the current request.
///
/// Hosts implement this on their session type; [`Actor`] implements it so
/// plain values can be passed where no session object exists.
pub trait ActorContext {
    fn actor_id(&self) -> &str;
    fn profile_ids(&self) -> &[String];

    fn to_actor(&self) -> Actor {
        Actor {
            id: self.actor_id().to_string(),
            profiles: self.profile_ids().to_vec(),
        }
    }
}

impl ActorContext for Actor {
    fn actor_id(&self) -> &str {
        &self.id
    }
    fn profile_ids(&self) -> &[String] {
        &self.profiles
    }
}

/// Target of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLocator {
    pub index: String,
    pub collection: String,
    #[serde(default, rename = "_id")]
    pub document_id: Option<String>,
}

impl ResourceLocator {
    pub fn collection(index: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            collection: collection.into(),
            document_id: None,
        }
    }

    pub fn document(
        index: impl Into<String>,
        collection: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            collection: collection.into(),
            document_id: Some(id.into()),
        }
    }
}

/// Document controller actions the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    CreateOrReplace,
    Replace,
    Update,
    Delete,
    Search,
    Count,
    DeleteByQuery,
    Get,
    #[serde(rename = "mGet")]
    MGet,
    Subscribe,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::CreateOrReplace => "createOrReplace",
            Action::Replace => "replace",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Search => "search",
            Action::Count => "count",
            Action::DeleteByQuery => "deleteByQuery",
            Action::Get => "get",
            Action::MGet => "mGet",
            Action::Subscribe => "subscribe",
        }
    }

    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            Action::CreateOrReplace | Action::Replace | Action::Update | Action::Delete
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming request as handed to the engine by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub action: Action,
    pub locator: ResourceLocator,
    pub actor: Actor,
    /// Search body (search/count/deleteByQuery) or realtime filter (subscribe).
    #[serde(default)]
    pub query: Option<Value>,
    /// Document body for mutations.
    #[serde(default)]
    pub body: Option<Value>,
}

impl Request {
    pub fn new(action: Action, locator: ResourceLocator, ctx: &impl ActorContext) -> Self {
        Self {
            action,
            locator,
            actor: ctx.to_actor(),
            query: None,
            body: None,
        }
    }

    pub fn with_query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Ownership attributes written by the store when a document is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub author: Option<String>,
}

impl DocumentMetadata {
    pub fn authored_by(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
        }
    }

    /// A missing author never matches, whoever asks.
    pub fn is_authored_by(&self, actor_id: &str) -> bool {
        self.author.as_deref() == Some(actor_id)
    }
}

/// Single stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: Value,
    #[serde(rename = "_kuzzle_info", default)]
    pub metadata: DocumentMetadata,
}

impl Document {
    pub fn new(id: impl Into<String>, author: impl Into<String>, source: Value) -> Self {
        Self {
            id: id.into(),
            source,
            metadata: DocumentMetadata::authored_by(author),
        }
    }
}

/// One position in a multi-get response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiGetItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub found: bool,
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    #[serde(rename = "_kuzzle_info", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl MultiGetItem {
    pub fn found(doc: Document) -> Self {
        Self {
            id: doc.id,
            found: true,
            source: Some(doc.source),
            metadata: Some(doc.metadata),
        }
    }

    /// Content-free placeholder that keeps only the positional id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            found: false,
            source: None,
            metadata: None,
        }
    }

    pub fn is_authored_by(&self, actor_id: &str) -> bool {
        self.found
            && self
                .metadata
                .as_ref()
                .is_some_and(|m| m.is_authored_by(actor_id))
    }
}

/// Ordered multi-get response.
pub type ResultSet = Vec<MultiGetItem>;
