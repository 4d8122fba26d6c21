//! Tree algorithms.
//!
//! The policy for inserting depends on the tree's shape:
//!
//! - **Binary**: BST descent by the type's comparator. Ties go right.
//! - **N-ary**: breadth-first search for the first node with a free child
//!   slot, which keeps the tree as bushy as possible.
//!
//! Search, delete and modify locate nodes by *rendered text*, not by typed
//! comparison, so values that render identically are indistinguishable to
//! them. Rebalancing always produces a binary tree.

mod convert;
mod edit;
mod insert;
mod rebalance;
mod traverse;

pub use convert::convert_to_binary;
pub use edit::{delete, find, modify};
pub use insert::{insert, insert_observed, insert_parsed, insert_random};
pub use rebalance::rebalance;
pub use traverse::{TreeStats, count, depth, stats, traverse, traverse_observed, traversal_text};

use algoviz_common::TreeNodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrumentation points of the tree algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    /// A node was visited by a descent, search or traversal.
    Visit(TreeNodeId),
    /// A node was created and linked into the tree.
    Inserted(TreeNodeId),
    /// A search matched this node.
    Found(TreeNodeId),
}

/// Visiting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Level by level, children in order.
    BreadthFirst,
    /// Node, then children.
    PreOrder,
    /// Left subtree, node, right subtree. N-ary nodes list themselves before
    /// their children.
    InOrder,
    /// Children, then node.
    PostOrder,
}

impl Traversal {
    /// All orders, in menu order.
    pub const ALL: [Traversal; 4] = [
        Traversal::BreadthFirst,
        Traversal::PreOrder,
        Traversal::InOrder,
        Traversal::PostOrder,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::PreOrder => "DFS pre-order",
            Self::InOrder => "DFS in-order",
            Self::PostOrder => "DFS post-order",
        }
    }

    /// Returns the pseudo-code listing for this order.
    #[must_use]
    pub const fn pseudo_code(self) -> &'static [&'static str] {
        match self {
            Self::BreadthFirst => &[
                "BFS(root):",
                "  Q = queue(root)",
                "  while Q is not empty:",
                "    n = dequeue(Q)",
                "    visit(n)",
                "    for each child c of n: enqueue(Q, c)",
            ],
            Self::PreOrder => &[
                "PRE_ORDER(n):",
                "  if n is null: return",
                "  visit(n)",
                "  for each child c of n: PRE_ORDER(c)",
            ],
            Self::InOrder => &[
                "IN_ORDER(n):",
                "  if n is null: return",
                "  IN_ORDER(n.left)",
                "  visit(n)",
                "  IN_ORDER(n.right)",
            ],
            Self::PostOrder => &[
                "POST_ORDER(n):",
                "  if n is null: return",
                "  for each child c of n: POST_ORDER(c)",
                "  visit(n)",
            ],
        }
    }

    /// Parses a name such as `"bfs"`, `"pre"`, `"in"` or `"post"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth" | "level" => Some(Self::BreadthFirst),
            "pre" | "preorder" | "pre-order" => Some(Self::PreOrder),
            "in" | "inorder" | "in-order" => Some(Self::InOrder),
            "post" | "postorder" | "post-order" => Some(Self::PostOrder),
            _ => None,
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
