//! Rule id to target finder table.
//!
//! Most rules report violations on nodes that can carry a suppression, so
//! they use `TargetFinder::Default` without being listed. Only rules whose
//! reported node cannot be annotated get an entry. Supporting another such
//! rule is a new row in `BUILTIN_TARGET_FINDERS`, nothing else.
//!
//! TODO: move the target finder onto the rule definition once rules carry
//! metadata; `SuppressionTargetPolicy` is the seam for that.

use lintmark_common::RuleId;
use lintmark_syntax::NodeView;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::finder::TargetFinder;

/// Rules whose violations must be suppressed somewhere other than the
/// reported node.
pub const BUILTIN_TARGET_FINDERS: &[(&str, TargetFinder)] = &[
    ("standard:class-signature", TargetFinder::CLASS),
    ("standard:function-signature", TargetFinder::FUNCTION),
    ("standard:parameter-list-wrapping", TargetFinder::FUNCTION),
];

/// Built once on first use, read-only afterwards.
static BUILTIN_REGISTRY: Lazy<TargetFinderRegistry> = Lazy::new(TargetFinderRegistry::builtin);

/// Immutable mapping from rule id to target finder.
///
/// Lookups never fail: a rule without an entry gets `TargetFinder::Default`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetFinderRegistry {
    entries: FxHashMap<RuleId, TargetFinder>,
}

impl TargetFinderRegistry {
    /// A registry without entries; every rule resolves to the default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry seeded with `BUILTIN_TARGET_FINDERS`.
    pub fn builtin() -> Self {
        BUILTIN_TARGET_FINDERS
            .iter()
            .fold(Self::empty(), |registry, &(rule, finder)| {
                registry.with_entry(RuleId::new(rule), finder)
            })
    }

    /// Add or replace the entry for `rule`.
    #[must_use]
    pub fn with_entry(mut self, rule: RuleId, finder: TargetFinder) -> Self {
        self.entries.insert(rule, finder);
        self
    }

    /// Finder for `rule`, falling back to `TargetFinder::Default`.
    #[inline]
    pub fn get(&self, rule: &RuleId) -> TargetFinder {
        self.explicit(rule).unwrap_or_default()
    }

    /// Finder only if `rule` has an entry.
    #[inline]
    pub fn explicit(&self, rule: &RuleId) -> Option<TargetFinder> {
        self.entries.get(rule).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All explicit entries, sorted by rule id.
    pub fn entries(&self) -> Vec<(&RuleId, TargetFinder)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(rule, &finder)| (rule, finder))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// The process-wide registry built from `BUILTIN_TARGET_FINDERS`.
pub fn builtin_registry() -> &'static TargetFinderRegistry {
    &BUILTIN_REGISTRY
}

/// Finder for `rule` in the builtin registry.
pub fn resolve_strategy(rule: &RuleId) -> TargetFinder {
    builtin_registry().get(rule)
}

/// Node that should carry the suppression of `rule` reported on `node`.
///
/// `None` means no node of the required kind encloses `node`; the caller
/// decides whether to skip the suppression or place it elsewhere.
pub fn find_target_node_for_suppression<'a>(
    rule: &RuleId,
    node: NodeView<'a>,
) -> Option<NodeView<'a>> {
    resolve_strategy(rule).find_suppression_target_node(node)
}
