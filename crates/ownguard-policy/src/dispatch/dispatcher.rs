use std::sync::Arc;

use ownguard_core::error::{PolicyError, Result};
use ownguard_core::model::{Document, Request, ResultSet};

use crate::policy::PolicyEngine;

use super::stage::{operation_for, LifecycleStage, Operation};

/// Payload handed over by the host at a lifecycle stage.
#[derive(Debug, Clone)]
pub enum Hook {
    Request(Request),
    Document { request: Request, document: Document },
    Results { request: Request, results: ResultSet },
}

/// What the host should continue with.
#[derive(Debug, Clone, PartialEq)]
pub enum HookOutcome {
    Request(Request),
    Document(Document),
    Results(ResultSet),
}

/// Routes lifecycle stages to engine operations.
#[derive(Clone)]
pub struct Dispatcher {
    engine: Arc<PolicyEngine>,
}

impl Dispatcher {
    pub fn new(engine: Arc<PolicyEngine>) -> Self {
        Self { engine }
    }

    /// Stages the host should register this dispatcher on.
    pub fn stages(&self) -> Vec<LifecycleStage> {
        LifecycleStage::ALL
            .into_iter()
            .filter(|st| self.is_enabled(*st))
            .collect()
    }

    pub fn is_enabled(&self, stage: LifecycleStage) -> bool {
        stage != LifecycleStage::BeforeSubscribe || self.engine.config().filter_subscriptions
    }

    pub async fn dispatch(&self, stage: LifecycleStage, hook: Hook) -> Result<HookOutcome> {
        let action = hook_request(&hook).action;
        if action != stage.action() {
            return Err(PolicyError::InvalidRequest(format!(
                "{stage} cannot handle a {action} request"
            )));
        }

        if !self.is_enabled(stage) {
            tracing::trace!(%stage, "stage not wired, pass through");
            return Ok(passthrough(hook));
        }

        match (operation_for(stage), hook) {
            (Operation::PreMutationCheck, Hook::Request(req)) => {
                self.engine.pre_mutation_check(&req).await?.into_result()?;
                Ok(HookOutcome::Request(req))
            }
            (Operation::QueryRewriter, Hook::Request(mut req)) => {
                req.query = self.engine.rewrite_query(&req);
                Ok(HookOutcome::Request(req))
            }
            (Operation::SubscriptionRewriter, Hook::Request(mut req)) => {
                req.query = self.engine.rewrite_subscription(&req);
                Ok(HookOutcome::Request(req))
            }
            (Operation::PostReadCheck, Hook::Document { request, document }) => self
                .engine
                .post_read_check(&request, document)
                .into_result()
                .map(HookOutcome::Document),
            (Operation::MultiReadFilter, Hook::Results { request, results }) => Ok(
                HookOutcome::Results(self.engine.filter_multi_read(&request, results)),
            ),
            (op, hook) => Err(PolicyError::InvalidRequest(format!(
                "{stage} ({op:?}) cannot handle a {} payload",
                hook_kind(&hook)
            ))),
        }
    }
}

fn passthrough(hook: Hook) -> HookOutcome {
    match hook {
        Hook::Request(r) => HookOutcome::Request(r),
        Hook::Document { document, .. } => HookOutcome::Document(document),
        Hook::Results { results, .. } => HookOutcome::Results(results),
    }
}

fn hook_request(hook: &Hook) -> &Request {
    match hook {
        Hook::Request(r) => r,
        Hook::Document { request, .. } => request,
        Hook::Results { request, .. } => request,
    }
}

fn hook_kind(hook: &Hook) -> &'static str {
    match hook {
        Hook::Request(_) => "request",
        Hook::Document { .. } => "document",
        Hook::Results { .. } => "results",
    }
}
