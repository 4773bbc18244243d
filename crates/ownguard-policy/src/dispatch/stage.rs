//! Lifecycle stages and the static stage -> operation table.

use std::fmt;
use std::str::FromStr;

use ownguard_core::error::PolicyError;
use ownguard_core::model::Action;

/// Host pipeline points the engine listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleStage {
    BeforeCount,
    BeforeSearch,
    BeforeDeleteByQuery,
    BeforeCreateOrReplace,
    BeforeReplace,
    BeforeUpdate,
    BeforeDelete,
    AfterGet,
    AfterMGet,
    BeforeSubscribe,
}

impl LifecycleStage {
    pub const ALL: [LifecycleStage; 10] = [
        LifecycleStage::BeforeCount,
        LifecycleStage::BeforeSearch,
        LifecycleStage::BeforeDeleteByQuery,
        LifecycleStage::BeforeCreateOrReplace,
        LifecycleStage::BeforeReplace,
        LifecycleStage::BeforeUpdate,
        LifecycleStage::BeforeDelete,
        LifecycleStage::AfterGet,
        LifecycleStage::AfterMGet,
        LifecycleStage::BeforeSubscribe,
    ];

    /// Event name used by the host.
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleStage::BeforeCount => "document:beforeCount",
            LifecycleStage::BeforeSearch => "document:beforeSearch",
            LifecycleStage::BeforeDeleteByQuery => "document:beforeDeleteByQuery",
            LifecycleStage::BeforeCreateOrReplace => "document:beforeCreateOrReplace",
            LifecycleStage::BeforeReplace => "document:beforeReplace",
            LifecycleStage::BeforeUpdate => "document:beforeUpdate",
            LifecycleStage::BeforeDelete => "document:beforeDelete",
            LifecycleStage::AfterGet => "document:afterGet",
            LifecycleStage::AfterMGet => "document:afterMGet",
            LifecycleStage::BeforeSubscribe => "realtime:beforeSubscribe",
        }
    }

    /// The only request action a host emits at this stage.
    pub fn action(self) -> Action {
        match self {
            LifecycleStage::BeforeCount => Action::Count,
            LifecycleStage::BeforeSearch => Action::Search,
            LifecycleStage::BeforeDeleteByQuery => Action::DeleteByQuery,
            LifecycleStage::BeforeCreateOrReplace => Action::CreateOrReplace,
            LifecycleStage::BeforeReplace => Action::Replace,
            LifecycleStage::BeforeUpdate => Action::Update,
            LifecycleStage::BeforeDelete => Action::Delete,
            LifecycleStage::AfterGet => Action::Get,
            LifecycleStage::AfterMGet => Action::MGet,
            LifecycleStage::BeforeSubscribe => Action::Subscribe,
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleStage {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleStage::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| PolicyError::InvalidRequest(format!("unknown lifecycle stage: {s}")))
    }
}

/// The four decision operations, plus the realtime filter variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    QueryRewriter,
    PreMutationCheck,
    PostReadCheck,
    MultiReadFilter,
    SubscriptionRewriter,
}

pub fn operation_for(stage: LifecycleStage) -> Operation {
    match stage {
        LifecycleStage::BeforeCount
        | LifecycleStage::BeforeSearch
        | LifecycleStage::BeforeDeleteByQuery => Operation::QueryRewriter,
        LifecycleStage::BeforeCreateOrReplace
        | LifecycleStage::BeforeReplace
        | LifecycleStage::BeforeUpdate
        | LifecycleStage::BeforeDelete => Operation::PreMutationCheck,
        LifecycleStage::AfterGet => Operation::PostReadCheck,
        LifecycleStage::AfterMGet => Operation::MultiReadFilter,
        LifecycleStage::BeforeSubscribe => Operation::SubscriptionRewriter,
    }
}
