//! Suppression requests.
//!
//! A request is a reported violation (rule id plus the node it was reported
//! on) that still needs a target node before a suppression can be placed.

use lintmark_common::RuleId;
use lintmark_syntax::{NodeArena, NodeIndex, NodeView};

use crate::finder::TargetFinder;
use crate::policy::SuppressionTargetPolicy;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuppressionRequest {
    pub rule_id: RuleId,
    pub node: NodeIndex,
}

/// Outcome of resolving a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuppressionTarget {
    /// Place the suppression on this node.
    Found(NodeIndex),
    /// Nothing in the tree can carry the suppression. Not an error; the
    /// caller picks a fallback or skips the suppression.
    NotFound { rule_id: RuleId, origin: NodeIndex },
}

impl SuppressionTarget {
    pub fn node(&self) -> Option<NodeIndex> {
        match self {
            SuppressionTarget::Found(index) => Some(*index),
            SuppressionTarget::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SuppressionTarget::Found(_))
    }
}

impl SuppressionRequest {
    pub fn new(rule_id: impl Into<RuleId>, node: NodeIndex) -> Self {
        Self {
            rule_id: rule_id.into(),
            node,
        }
    }

    pub fn target_finder(&self, policy: &dyn SuppressionTargetPolicy) -> TargetFinder {
        policy.target_finder(&self.rule_id)
    }

    /// Resolve against `arena`. A node index that is not in `arena` resolves
    /// to `NotFound`.
    pub fn resolve(
        &self,
        arena: &NodeArena,
        policy: &dyn SuppressionTargetPolicy,
    ) -> SuppressionTarget {
        let found = NodeView::new(arena, self.node)
            .and_then(|view| policy.find_target_node(&self.rule_id, view));
        match found {
            Some(view) => SuppressionTarget::Found(view.index()),
            None => SuppressionTarget::NotFound {
                rule_id: self.rule_id.clone(),
                origin: self.node,
            },
        }
    }
}

/// Resolve each request in order.
pub fn resolve_all<'r>(
    arena: &NodeArena,
    policy: &dyn SuppressionTargetPolicy,
    requests: impl IntoIterator<Item = &'r SuppressionRequest>,
) -> Vec<SuppressionTarget> {
    requests
        .into_iter()
        .map(|request| request.resolve(arena, policy))
        .collect()
}
