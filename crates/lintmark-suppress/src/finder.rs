//! Suppression target finders.
//!
//! A finder maps the node a violation was reported on to the node that
//! should carry the suppression. There are two shapes:
//!
//! - `Default` keeps the reported node.
//! - `ClimbTo(kind)` returns the node itself when it already has `kind`,
//!   otherwise the nearest ancestor of that kind, or `None` when the root is
//!   reached without a match.
//!
//! Finders are plain `Copy` values with no state; the same input always
//! produces the same output and the tree is never touched.

use lintmark_syntax::{NodeView, SyntaxKind};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "target", rename_all = "kebab-case")]
pub enum TargetFinder {
    /// The reported node is already a valid target.
    #[default]
    Default,
    /// Climb to the nearest node (self included) of the given kind.
    ClimbTo(SyntaxKind),
}

impl TargetFinder {
    /// Suppress on the enclosing function declaration.
    pub const FUNCTION: TargetFinder = TargetFinder::ClimbTo(SyntaxKind::FunctionDeclaration);

    /// Suppress on the enclosing class declaration.
    pub const CLASS: TargetFinder = TargetFinder::ClimbTo(SyntaxKind::ClassDeclaration);

    /// Find the node that carries the suppression for a violation on `node`.
    pub fn find_suppression_target_node<'a>(self, node: NodeView<'a>) -> Option<NodeView<'a>> {
        match self {
            TargetFinder::Default => Some(node),
            TargetFinder::ClimbTo(target) => {
                tracing::trace!(
                    origin = ?node.index(),
                    kind = %node.kind(),
                    %target,
                    "climbing to suppression target"
                );
                let found = node.find_ancestor_or_self(|kind| kind == target);
                if found.is_none() {
                    tracing::debug!(
                        origin = ?node.index(),
                        %target,
                        "no ancestor can carry the suppression"
                    );
                }
                found
            }
        }
    }

    /// Kind a climbing finder looks for.
    pub fn target_kind(self) -> Option<SyntaxKind> {
        match self {
            TargetFinder::Default => None,
            TargetFinder::ClimbTo(kind) => Some(kind),
        }
    }

    pub fn is_default(self) -> bool {
        self == TargetFinder::Default
    }
}

impl fmt::Display for TargetFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetFinder::Default => f.write_str("default"),
            TargetFinder::ClimbTo(kind) => write!(f, "climb-to({kind})"),
        }
    }
}
