//! NodeArena access methods, parent traversal, and NodeView.

use std::fmt;

use crate::base::NodeIndex;
use crate::node_arena::{Node, NodeArena};
use crate::syntax_kind::SyntaxKind;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|node| node.kind)
    }

    /// Parent index, `NodeIndex::NONE` for roots and unknown indices.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        if index.is_none() {
            return &[];
        }
        self.children
            .get(index.0 as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first node added, if any.
    pub fn root(&self) -> NodeIndex {
        if self.nodes.is_empty() {
            NodeIndex::NONE
        } else {
            NodeIndex(0)
        }
    }

    /// All node indices in insertion order (parents before children).
    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        // push() never stores a node at or past the sentinel
        let len = u32::try_from(self.nodes.len()).unwrap_or(NodeIndex::NONE.0);
        (0..len).map(NodeIndex)
    }

    /// Strict ancestors of `index`, nearest first.
    pub fn ancestors(&self, index: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            current: self.parent(index),
        }
    }

    /// Nearest strict ancestor whose kind satisfies `predicate`.
    ///
    /// The node itself is never considered.
    pub fn find_parent(
        &self,
        index: NodeIndex,
        predicate: impl Fn(SyntaxKind) -> bool,
    ) -> Option<NodeIndex> {
        self.ancestors(index)
            .find(|&ancestor| self.kind(ancestor).is_some_and(&predicate))
    }

    /// Like `find_parent`, but `index` itself is checked first.
    pub fn find_ancestor_or_self(
        &self,
        index: NodeIndex,
        predicate: impl Fn(SyntaxKind) -> bool,
    ) -> Option<NodeIndex> {
        match self.kind(index) {
            Some(kind) if predicate(kind) => Some(index),
            Some(_) => self.find_parent(index, predicate),
            None => None,
        }
    }

    /// Number of ancestors; a root has depth 0.
    pub fn depth(&self, index: NodeIndex) -> usize {
        self.ancestors(index).count()
    }
}

/// Iterator over the strict ancestors of a node.
#[derive(Clone)]
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    current: NodeIndex,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let node = self.arena.get(self.current)?;
        let index = self.current;
        debug_assert!(
            node.parent.is_none() || node.parent < index,
            "parent index must precede child"
        );
        self.current = node.parent;
        Some(index)
    }
}

/// A view into a node that carries its arena, so callers can walk the tree
/// without passing the arena around.
#[derive(Clone, Copy)]
pub struct NodeView<'a> {
    pub node: &'a Node,
    pub arena: &'a NodeArena,
    pub index: NodeIndex,
}

impl<'a> NodeView<'a> {
    /// Create a new NodeView, `None` for `NONE` or foreign indices.
    #[inline]
    pub fn new(arena: &'a NodeArena, index: NodeIndex) -> Option<NodeView<'a>> {
        arena.get(index).map(|node| NodeView { node, arena, index })
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.node.kind
    }

    #[inline]
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.node.pos
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.node.end
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.node.is_root()
    }

    /// Parent as a view, `None` at the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeView<'a>> {
        NodeView::new(self.arena, self.node.parent)
    }

    /// Strict ancestors, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = NodeView<'a>> + 'a {
        let arena = self.arena;
        arena
            .ancestors(self.index)
            .filter_map(move |index| NodeView::new(arena, index))
    }

    /// Nearest strict ancestor whose kind satisfies `predicate`.
    pub fn find_parent(&self, predicate: impl Fn(SyntaxKind) -> bool) -> Option<NodeView<'a>> {
        self.arena
            .find_parent(self.index, predicate)
            .and_then(|index| NodeView::new(self.arena, index))
    }

    /// This node when its kind satisfies `predicate`, else the nearest such
    /// ancestor.
    pub fn find_ancestor_or_self(
        &self,
        predicate: impl Fn(SyntaxKind) -> bool,
    ) -> Option<NodeView<'a>> {
        self.arena
            .find_ancestor_or_self(self.index, predicate)
            .and_then(|index| NodeView::new(self.arena, index))
    }

    pub fn children(self) -> impl Iterator<Item = NodeView<'a>> + 'a {
        let arena = self.arena;
        arena
            .children(self.index)
            .iter()
            .filter_map(move |&index| NodeView::new(arena, index))
    }
}

// Two views are equal when they point at the same node of the same arena.
impl PartialEq for NodeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.index == other.index
    }
}

impl Eq for NodeView<'_> {}

impl fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("index", &self.index)
            .field("kind", &self.node.kind)
            .field("pos", &self.node.pos)
            .field("end", &self.node.end)
            .finish()
    }
}
