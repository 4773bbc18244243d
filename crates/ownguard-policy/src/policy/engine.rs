use std::sync::Arc;

use serde_json::Value;

use ownguard_core::error::{PolicyError, Result};
use ownguard_core::model::{Actor, Document, MultiGetItem, Request, ResultSet};
use ownguard_core::query::{restrict_search_body, restrict_subscription_filter};

use crate::config::PolicyConfig;
use crate::store::{DocumentReader, ReadError};

use super::denial::{Denial, DenialFactory, StandardDenials};

/// Decision from a policy check.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyDecision<T = ()> {
    Pass(T),
    Reject(Denial),
}

impl<T> PolicyDecision<T> {
    pub fn is_pass(&self) -> bool {
        matches!(self, PolicyDecision::Pass(_))
    }

    pub fn into_result(self) -> Result<T> {
        match self {
            PolicyDecision::Pass(v) => Ok(v),
            PolicyDecision::Reject(d) => Err(d.into()),
        }
    }
}

/// Ownership engine.
/// Construct once at startup, then share via Arc.
pub struct PolicyEngine {
    cfg: PolicyConfig,
    reader: Arc<dyn DocumentReader>,
    denials: Arc<dyn DenialFactory>,
}

impl PolicyEngine {
    pub fn new(cfg: PolicyConfig, reader: Arc<dyn DocumentReader>) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            reader,
            denials: Arc::new(StandardDenials),
        })
    }

    pub fn with_denials(mut self, denials: Arc<dyn DenialFactory>) -> Self {
        self.denials = denials;
        self
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.cfg
    }

    /// Privileged actors bypass every check below.
    pub fn is_privileged(&self, actor: &Actor) -> bool {
        actor.has_profile(&self.cfg.admin_profile)
    }

    /// Before createOrReplace/replace/update/delete: one read of the target.
    ///
    /// Non-mutation actions and missing document ids are rejected before the
    /// read. A missing target passes (upsert). Store failures other than not-found
    /// come back as `PolicyError::Backend` with the reader's error untouched.
    pub async fn pre_mutation_check(&self, req: &Request) -> Result<PolicyDecision> {
        if self.is_privileged(&req.actor) {
            tracing::trace!(actor = %req.actor.id, action = %req.action, "privileged, skip");
            return Ok(PolicyDecision::Pass(()));
        }

        if !req.action.is_mutation() {
            return Err(PolicyError::InvalidRequest(format!(
                "{} is not a document mutation",
                req.action
            )));
        }

        if req.locator.document_id.is_none() {
            return Err(PolicyError::InvalidRequest(format!(
                "{} on {}/{} requires a document id",
                req.action, req.locator.index, req.locator.collection
            )));
        }

        let doc = match self.reader.read(&req.locator).await {
            Ok(doc) => doc,
            Err(ReadError::NotFound) => {
                tracing::debug!(
                    actor = %req.actor.id,
                    action = %req.action,
                    "target does not exist yet, pass"
                );
                return Ok(PolicyDecision::Pass(()));
            }
            Err(ReadError::Backend(e)) => return Err(PolicyError::Backend(e)),
        };

        Ok(self.check_author(req, doc.metadata.is_authored_by(&req.actor.id), ()))
    }

    /// Before search/count/deleteByQuery: AND the ownership term into the body.
    pub fn rewrite_query(&self, req: &Request) -> Option<Value> {
        if self.is_privileged(&req.actor) {
            return req.query.clone();
        }
        let out = restrict_search_body(req.query.as_ref(), &self.cfg.author_field, &req.actor.id);
        tracing::trace!(actor = %req.actor.id, action = %req.action, "search body restricted");
        Some(out)
    }

    /// Before subscribe: AND the ownership clause into the realtime filter.
    pub fn rewrite_subscription(&self, req: &Request) -> Option<Value> {
        if self.is_privileged(&req.actor) {
            return req.query.clone();
        }
        Some(restrict_subscription_filter(
            req.query.as_ref(),
            &self.cfg.author_field,
            &req.actor.id,
        ))
    }

    /// After get: the fetched document goes back only to its author.
    pub fn post_read_check(&self, req: &Request, doc: Document) -> PolicyDecision<Document> {
        if self.is_privileged(&req.actor) {
            return PolicyDecision::Pass(doc);
        }
        let owned = doc.metadata.is_authored_by(&req.actor.id);
        self.check_author(req, owned, doc)
    }

    /// After mGet: redact every position the actor does not own.
    ///
    /// Length and order are preserved; redacted positions are
    /// indistinguishable from documents that never existed.
    pub fn filter_multi_read(&self, req: &Request, results: ResultSet) -> ResultSet {
        if self.is_privileged(&req.actor) {
            return results;
        }
        let mut redacted = 0usize;
        let out: ResultSet = results
            .into_iter()
            .map(|item| {
                if item.is_authored_by(&req.actor.id) {
                    item
                } else {
                    if item.found {
                        redacted += 1;
                    }
                    MultiGetItem::not_found(item.id)
                }
            })
            .collect();
        tracing::debug!(actor = %req.actor.id, total = out.len(), redacted, "multi-get filtered");
        out
    }

    fn check_author<T>(&self, req: &Request, owned: bool, value: T) -> PolicyDecision<T> {
        if owned {
            PolicyDecision::Pass(value)
        } else {
            PolicyDecision::Reject(self.deny(req))
        }
    }

    fn deny(&self, req: &Request) -> Denial {
        if req.actor.id == self.cfg.anonymous_id {
            self.denials.unauthenticated(req)
        } else {
            self.denials.forbidden(req)
        }
    }
}
