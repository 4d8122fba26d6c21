//! Search, deletion and in-place modification by rendered text.

use super::TreeEvent;
use algoviz_common::{Error, Result, TreeNodeId, Value};
use algoviz_core::{Observer, Tree};
use std::collections::VecDeque;

/// Returns the first node, in breadth-first order, whose rendered value
/// equals `text`.
pub fn find<O>(tree: &Tree, text: &str, observer: &mut O) -> Option<TreeNodeId>
where
    O: Observer<TreeEvent> + ?Sized,
{
    let mut queue: VecDeque<TreeNodeId> = tree.root().into_iter().collect();
    while let Some(current) = queue.pop_front() {
        observer.on_event(TreeEvent::Visit(current));
        if tree.value(current).is_some_and(|v| v.render() == text) {
            observer.on_event(TreeEvent::Found(current));
            return Some(current);
        }
        queue.extend(tree.child_ids(current));
    }
    None
}

/// Deletes the node matching `text` together with its whole subtree and
/// returns how many nodes were removed. Deleting the root empties the tree.
///
/// # Errors
///
/// Returns `Error::NodeNotFound` if no node renders as `text`; the tree is
/// left unchanged.
pub fn delete<O>(tree: &mut Tree, text: &str, observer: &mut O) -> Result<usize>
where
    O: Observer<TreeEvent> + ?Sized,
{
    let target = find(tree, text, observer).ok_or_else(|| Error::NodeNotFound(text.to_string()))?;
    let removed = if Some(target) == tree.root() {
        let all = tree.len();
        tree.clear();
        all
    } else {
        tree.remove_subtree(target)?
    };
    tracing::debug!(text, removed, "tree subtree deleted");
    Ok(removed)
}

/// Overwrites the value of the node matching `text`, returning the old value.
///
/// The node keeps its position even if the new value breaks BST order.
///
/// # Errors
///
/// Returns `Error::NodeNotFound` if no node renders as `text`, or
/// `Error::TypeMismatch` if `value` is of another kind.
pub fn modify<O>(tree: &mut Tree, text: &str, value: Value, observer: &mut O) -> Result<Value>
where
    O: Observer<TreeEvent> + ?Sized,
{
    let target = find(tree, text, observer).ok_or_else(|| Error::NodeNotFound(text.to_string()))?;
    tree.replace_value(target, value)
}
