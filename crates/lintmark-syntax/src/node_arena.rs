//! NodeArena storage and creation methods (add_* methods).

use crate::base::NodeIndex;
use crate::syntax_kind::SyntaxKind;

/// A single syntax tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: SyntaxKind,
    /// Structural parent, `NodeIndex::NONE` for a root.
    pub parent: NodeIndex,
    /// Start position (byte offset)
    pub pos: u32,
    /// End position (byte offset, exclusive)
    pub end: u32,
}

impl Node {
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Owns every node of one parsed document.
///
/// Nodes are only added under a parent that already exists, so a parent's
/// index is always smaller than its child's. Parent chains therefore strictly
/// decrease and every upward walk terminates.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) children: Vec<Vec<NodeIndex>>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            children: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.children.clear();
    }

    /// Returns `NodeIndex::NONE` and stores nothing once the arena is full.
    fn push(&mut self, node: Node) -> NodeIndex {
        let Some(index) = NodeIndex::from_usize(self.nodes.len()) else {
            tracing::debug!(kind = %node.kind, len = self.nodes.len(), "arena full: node dropped");
            return NodeIndex::NONE;
        };
        self.nodes.push(node);
        self.children.push(Vec::new());
        index
    }

    /// Add a parentless node.
    ///
    /// Returns `NodeIndex::NONE` when the arena cannot index another node.
    pub fn add_root(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push(Node {
            kind,
            parent: NodeIndex::NONE,
            pos,
            end: end.max(pos),
        })
    }

    /// Add a node under `parent`.
    ///
    /// The child's range is clamped into the parent's range. Returns
    /// `NodeIndex::NONE` and adds nothing when `parent` is not in this arena
    /// or the arena is full.
    pub fn add_child(
        &mut self,
        parent: NodeIndex,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let Some(parent_node) = self.get(parent) else {
            tracing::debug!(?parent, %kind, "add_child: parent not in arena");
            return NodeIndex::NONE;
        };

        let (parent_pos, parent_end) = (parent_node.pos, parent_node.end);
        let clamped_pos = pos.clamp(parent_pos, parent_end);
        let clamped_end = end.clamp(clamped_pos, parent_end);
        if clamped_pos != pos || clamped_end != end {
            tracing::debug!(
                %kind,
                pos,
                end,
                parent_pos,
                parent_end,
                "add_child: range clamped into parent"
            );
        }

        let child = self.push(Node {
            kind,
            parent,
            pos: clamped_pos,
            end: clamped_end,
        });
        if child.is_none() {
            return child;
        }
        if let Some(siblings) = self.children.get_mut(parent.0 as usize) {
            siblings.push(child);
        }
        child
    }

    /// Add a child spanning the parent's whole range.
    ///
    /// Convenient for trees where positions do not matter.
    pub fn add_child_spanning(&mut self, parent: NodeIndex, kind: SyntaxKind) -> NodeIndex {
        match self.get(parent) {
            Some(node) => {
                let (pos, end) = (node.pos, node.end);
                self.add_child(parent, kind, pos, end)
            }
            None => self.add_child(parent, kind, 0, 0),
        }
    }
}
