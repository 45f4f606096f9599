//! Base handle type for arena nodes.

use std::fmt;

/// Index of a node in a `NodeArena`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for "no node" (the parent of a root).
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Index for the `position`-th node, `None` when it would not fit below
    /// the sentinel.
    #[inline]
    pub fn from_usize(position: usize) -> Option<NodeIndex> {
        u32::try_from(position)
            .ok()
            .map(NodeIndex)
            .filter(|index| index.is_some())
    }

    /// Convert to `Option`, mapping the sentinel to `None`.
    #[inline]
    pub const fn into_option(self) -> Option<NodeIndex> {
        if self.is_none() { None } else { Some(self) }
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("NodeIndex(NONE)")
        } else {
            write!(f, "NodeIndex({})", self.0)
        }
    }
}
