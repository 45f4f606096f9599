//! Policy seam between callers and the finder table.
//!
//! Callers that place suppressions depend on this trait rather than on
//! `TargetFinderRegistry`, so the table can later be replaced by finders
//! declared on the rules themselves.

use lintmark_common::RuleId;
use lintmark_syntax::NodeView;

use crate::finder::TargetFinder;
use crate::registry::TargetFinderRegistry;

pub trait SuppressionTargetPolicy: Send + Sync {
    /// Finder to use for `rule`. Must not fail for unknown rules.
    fn target_finder(&self, rule: &RuleId) -> TargetFinder;

    fn find_target_node<'a>(&self, rule: &RuleId, node: NodeView<'a>) -> Option<NodeView<'a>> {
        self.target_finder(rule).find_suppression_target_node(node)
    }
}

impl SuppressionTargetPolicy for TargetFinderRegistry {
    #[inline]
    fn target_finder(&self, rule: &RuleId) -> TargetFinder {
        self.get(rule)
    }
}
