//! Suppression target resolution.
//!
//! A violation is reported on some node, but not every node can carry a
//! suppression. A parameter inside a parameter list, for instance, has to be
//! suppressed on the owning function. This crate decides, per rule, which
//! node the suppression attaches to:
//! - `TargetFinder` - The strategies (keep the node, or climb to a kind)
//! - `TargetFinderRegistry` - Rule id to strategy table with a default
//! - `SuppressionTargetPolicy` - The seam callers depend on
//! - `SuppressionRequest` - A violation waiting for its target
//! - `SuppressionConfig` - Project-level additions to the table
//!
//! ```
//! use lintmark_common::RuleId;
//! use lintmark_suppress::find_target_node_for_suppression;
//! use lintmark_syntax::{NodeArena, NodeView, SyntaxKind};
//!
//! let mut arena = NodeArena::new();
//! let file = arena.add_root(SyntaxKind::File, 0, 40);
//! let fun = arena.add_child_spanning(file, SyntaxKind::FunctionDeclaration);
//! let params = arena.add_child_spanning(fun, SyntaxKind::ParameterList);
//! let param = arena.add_child_spanning(params, SyntaxKind::Parameter);
//!
//! let rule = RuleId::new("standard:parameter-list-wrapping");
//! let node = NodeView::new(&arena, param).unwrap();
//! let target = find_target_node_for_suppression(&rule, node).unwrap();
//! assert_eq!(target.index(), fun);
//! ```

pub mod finder;
pub use finder::TargetFinder;

// Rule id to strategy table and the process-wide builtin instance
pub mod registry;
pub use registry::{
    BUILTIN_TARGET_FINDERS, TargetFinderRegistry, builtin_registry,
    find_target_node_for_suppression, resolve_strategy,
};

pub mod policy;
pub use policy::SuppressionTargetPolicy;

pub mod request;
pub use request::{SuppressionRequest, SuppressionTarget, resolve_all};

// Project configuration (.lintmark.json)
pub mod config;
pub use config::{CONFIG_FILE_NAME, ConfigError, SuppressionConfig};

pub mod tracing_config;
