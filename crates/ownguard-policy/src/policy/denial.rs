//! Denial construction.

use ownguard_core::error::PolicyError;
use ownguard_core::model::Request;

/// Which error a rejection surfaces as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialKind {
    Unauthenticated,
    Forbidden,
}

/// Terminal rejection of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    pub kind: DenialKind,
    pub message: String,
}

impl From<Denial> for PolicyError {
    fn from(d: Denial) -> Self {
        match d.kind {
            DenialKind::Unauthenticated => PolicyError::Unauthenticated(d.message),
            DenialKind::Forbidden => PolicyError::Forbidden(d.message),
        }
    }
}

/// Error-construction capability used when the engine rejects a request.
///
/// The engine decides which kind applies; implementations only shape it.
pub trait DenialFactory: Send + Sync {
    fn unauthenticated(&self, req: &Request) -> Denial;
    fn forbidden(&self, req: &Request) -> Denial;
}

/// Messages naming the attempted action and its target.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDenials;

impl DenialFactory for StandardDenials {
    fn unauthenticated(&self, req: &Request) -> Denial {
        Denial {
            kind: DenialKind::Unauthenticated,
            message: format!("authentication required to {}", target(req)),
        }
    }

    fn forbidden(&self, req: &Request) -> Denial {
        Denial {
            kind: DenialKind::Forbidden,
            message: format!("user {} is not allowed to {}", req.actor.id, target(req)),
        }
    }
}

fn target(req: &Request) -> String {
    let l = &req.locator;
    match &l.document_id {
        Some(id) => format!(
            "{} document {id} in {}/{}",
            req.action, l.index, l.collection
        ),
        None => format!("{} documents in {}/{}", req.action, l.index, l.collection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ownguard_core::model::{Action, Actor, ResourceLocator};

    #[test]
    fn messages_name_index_collection_and_action() {
        let req = Request::new(
            Action::Update,
            ResourceLocator::document("shop", "orders", "o1"),
            &Actor::new("u2", ["default"]),
        );
        let d = StandardDenials.forbidden(&req);
        assert_eq!(d.kind, DenialKind::Forbidden);
        assert_eq!(
            d.message,
            "user u2 is not allowed to update document o1 in shop/orders"
        );

        let d = StandardDenials.unauthenticated(&req);
        assert!(d.message.contains("update") && d.message.contains("shop/orders"));
        assert!(matches!(PolicyError::from(d), PolicyError::Unauthenticated(_)));
    }
}
