//! Traversals, node count and depth.
//!
//! All walks use explicit work stacks, so degenerate trees (a BST fed sorted
//! input is a linked chain) cannot overflow the native stack.

use super::{Traversal, TreeEvent};
use algoviz_common::TreeNodeId;
use algoviz_core::{Children, NoopObserver, Observer, Tree};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Size and height of a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of nodes.
    pub count: usize,
    /// Number of levels; 0 for an empty tree, 1 for a lone root.
    pub depth: usize,
}

enum Frame {
    Enter(TreeNodeId),
    Emit(TreeNodeId),
}

/// Returns node ids in the given order.
#[must_use]
pub fn traverse(tree: &Tree, order: Traversal) -> Vec<TreeNodeId> {
    traverse_observed(tree, order, &mut NoopObserver)
}

/// Like [`traverse`], reporting each node as it is visited.
pub fn traverse_observed<O>(tree: &Tree, order: Traversal, observer: &mut O) -> Vec<TreeNodeId>
where
    O: Observer<TreeEvent> + ?Sized,
{
    let Some(root) = tree.root() else {
        return Vec::new();
    };
    let mut visited = Vec::with_capacity(tree.len());
    let mut emit = |id: TreeNodeId| {
        observer.on_event(TreeEvent::Visit(id));
        visited.push(id);
    };

    if order == Traversal::BreadthFirst {
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            emit(current);
            queue.extend(tree.child_ids(current));
        }
        return visited;
    }

    let mut stack = vec![Frame::Enter(root)];
    while let Some(frame) = stack.pop() {
        let id = match frame {
            Frame::Emit(id) => {
                emit(id);
                continue;
            }
            Frame::Enter(id) => id,
        };
        let Some(children) = tree.children(id) else {
            continue;
        };
        // Frames are pushed in reverse of the order they should run.
        match (order, children) {
            (Traversal::InOrder, Children::Binary { left, right }) => {
                stack.extend(right.map(Frame::Enter));
                stack.push(Frame::Emit(id));
                stack.extend(left.map(Frame::Enter));
            }
            (Traversal::PostOrder, _) => {
                stack.push(Frame::Emit(id));
                stack.extend(children.ids().into_iter().rev().map(Frame::Enter));
            }
            // Pre-order, and in-order over N-ary nodes: node first.
            _ => {
                stack.extend(children.ids().into_iter().rev().map(Frame::Enter));
                stack.push(Frame::Emit(id));
            }
        }
    }
    visited
}

/// Renders the values in the given order, separated by single spaces.
#[must_use]
pub fn traversal_text(tree: &Tree, order: Traversal) -> String {
    traverse(tree, order)
        .into_iter()
        .filter_map(|id| tree.value(id).map(algoviz_common::Value::render))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Counts the nodes reachable from the root.
#[must_use]
pub fn count(tree: &Tree) -> usize {
    let mut total = 0;
    let mut stack: Vec<TreeNodeId> = tree.root().into_iter().collect();
    while let Some(id) = stack.pop() {
        total += 1;
        stack.extend(tree.child_ids(id));
    }
    total
}

/// Returns the number of levels.
#[must_use]
pub fn depth(tree: &Tree) -> usize {
    let mut levels = 0;
    let mut frontier: Vec<TreeNodeId> = tree.root().into_iter().collect();
    while !frontier.is_empty() {
        levels += 1;
        frontier = frontier.iter().flat_map(|&id| tree.child_ids(id)).collect();
    }
    levels
}

/// Returns count and depth together.
#[must_use]
pub fn stats(tree: &Tree) -> TreeStats {
    TreeStats {
        count: count(tree),
        depth: depth(tree),
    }
}
