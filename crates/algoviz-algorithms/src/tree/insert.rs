//! Insertion policies.

use super::TreeEvent;
use algoviz_common::{RandomProfile, Result, TreeNodeId, Value, ValueGenerator};
use algoviz_core::containers::Side;
use algoviz_core::{NoopObserver, Observer, Tree, TreeShape};
use std::collections::VecDeque;

/// Inserts `value` according to the tree's shape.
///
/// # Errors
///
/// Returns `Error::TypeMismatch` if `value` is of another kind.
pub fn insert(tree: &mut Tree, value: Value) -> Result<TreeNodeId> {
    insert_observed(tree, value, &mut NoopObserver)
}

/// Like [`insert`], reporting every visited node.
///
/// # Errors
///
/// Returns `Error::TypeMismatch` if `value` is of another kind.
pub fn insert_observed<O>(tree: &mut Tree, value: Value, observer: &mut O) -> Result<TreeNodeId>
where
    O: Observer<TreeEvent> + ?Sized,
{
    let id = match (tree.root(), tree.shape()) {
        (None, _) => tree.insert_root(value)?,
        (Some(root), TreeShape::Binary) => insert_bst(tree, root, value, observer)?,
        (Some(root), TreeShape::Nary { degree }) => {
            insert_level_order(tree, root, degree, value, observer)?
        }
    };
    observer.on_event(TreeEvent::Inserted(id));
    Ok(id)
}

/// Parses `token` with the tree's value kind and inserts the result.
///
/// # Errors
///
/// Never fails for a well-formed tree; parse failures yield a zero value.
pub fn insert_parsed(tree: &mut Tree, token: &str) -> Result<TreeNodeId> {
    let value = tree.value_type().parse_token(token);
    insert(tree, value)
}

/// Inserts `count` random values from the tree profile.
///
/// # Errors
///
/// Never fails for a well-formed tree.
pub fn insert_random(
    tree: &mut Tree,
    count: usize,
    generator: &mut ValueGenerator,
) -> Result<Vec<TreeNodeId>> {
    let ty = tree.value_type();
    (0..count)
        .map(|_| insert(tree, generator.value(ty, RandomProfile::Tree)))
        .collect()
}

fn insert_bst<O>(tree: &mut Tree, root: TreeNodeId, value: Value, observer: &mut O) -> Result<TreeNodeId>
where
    O: Observer<TreeEvent> + ?Sized,
{
    let mut current = root;
    loop {
        observer.on_event(TreeEvent::Visit(current));
        let goes_left = tree
            .value(current)
            .is_some_and(|existing| value.compare(existing).is_lt());
        let (side, next) = if goes_left {
            (Side::Left, tree.left(current))
        } else {
            (Side::Right, tree.right(current))
        };
        match next {
            Some(child) => current = child,
            None => return tree.attach_binary(current, side, value),
        }
    }
}

fn insert_level_order<O>(
    tree: &mut Tree,
    root: TreeNodeId,
    degree: usize,
    value: Value,
    observer: &mut O,
) -> Result<TreeNodeId>
where
    O: Observer<TreeEvent> + ?Sized,
{
    let mut queue = VecDeque::from([root]);
    while let Some(current) = queue.pop_front() {
        observer.on_event(TreeEvent::Visit(current));
        let children = tree.child_ids(current);
        if children.len() < degree {
            return tree.attach_child(current, value);
        }
        queue.extend(children);
    }
    // Unreachable for a finite tree: some leaf always has room.
    tree.attach_child(root, value)
}
