//! Identifier types.
//!
//! Graph node ids are user-visible and monotonically assigned; arena handles
//! for lists and trees are slot indices that stay valid while the node lives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a graph node.
///
/// Ids are assigned from 1 upwards and never reused within one graph, so
/// algorithms may size side tables by `max_id + 1` and index them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a node id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the id as a side-table index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

macro_rules! arena_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Creates a handle from an arena slot.
            #[inline]
            #[must_use]
            pub const fn from_slot(slot: usize) -> Self {
                Self(slot as u32)
            }

            /// Returns the arena slot this handle addresses.
            #[inline]
            #[must_use]
            pub const fn slot(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_handle!(
    /// Handle of a node in a linked list arena.
    ListNodeId
);

arena_handle!(
    /// Handle of a node in a tree arena.
    TreeNodeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_display_and_index() {
        let id = NodeId::new(7);
        assert_eq!(id.to_string(), "N7");
        assert_eq!(id.index(), 7);
        assert_eq!(id.as_u32(), 7);
    }

    #[test]
    fn test_arena_handle_roundtrip() {
        let h = TreeNodeId::from_slot(42);
        assert_eq!(h.slot(), 42);
        assert_eq!(ListNodeId::from_slot(3), ListNodeId::from_slot(3));
    }
}
