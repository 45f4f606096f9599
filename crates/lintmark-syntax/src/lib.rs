//! Syntax tree model for lintmark.
//!
//! This crate provides the tree that suppression targets are resolved on:
//! - `SyntaxKind` - Node type tags
//! - `NodeIndex` - Arena handle with a `NONE` sentinel
//! - `NodeArena` - Owns the nodes and their parent links
//! - `NodeView` - Borrowed handle pairing an arena with an index
//!
//! Nodes never own their parents. A parent link is a `NodeIndex` into the
//! same arena, and the arena only accepts a child under an existing parent,
//! so every parent chain ends at a root.

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod base;
pub use base::NodeIndex;

// Node storage and creation (add_* methods)
pub mod node_arena;
pub use node_arena::{Node, NodeArena};

// Node access, traversal and NodeView
pub mod node_access;
pub use node_access::{Ancestors, NodeView};
