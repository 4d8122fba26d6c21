//! N-ary to binary conversion.

use super::{Traversal, traverse};
use algoviz_common::utils::hash::{FastHashMap, map_with_capacity};
use algoviz_common::{Result, TreeNodeId};
use algoviz_core::{Children, Tree, TreeShape};

/// Converts an N-ary tree to its left-child/right-sibling binary form.
///
/// A node's first child becomes its left child and each later sibling hangs
/// off the right link of the sibling before it. Pre-order is preserved. The
/// conversion is one-way; a binary tree is left untouched.
///
/// # Errors
///
/// Never fails for a well-formed tree.
pub fn convert_to_binary(tree: &mut Tree) -> Result<()> {
    if tree.shape().is_binary() {
        return Ok(());
    }

    let ids = traverse(tree, Traversal::PreOrder);
    let mut links: FastHashMap<TreeNodeId, (Option<TreeNodeId>, Option<TreeNodeId>)> =
        map_with_capacity(ids.len());
    for &id in &ids {
        links.entry(id).or_default();
        let children = tree.child_ids(id);
        if let Some(&first) = children.first() {
            links.entry(id).or_default().0 = Some(first);
        }
        for pair in children.windows(2) {
            links.entry(pair[0]).or_default().1 = Some(pair[1]);
        }
    }

    tree.relink(
        TreeShape::Binary,
        links
            .into_iter()
            .map(|(id, (left, right))| (id, Children::Binary { left, right })),
    )?;
    tracing::debug!(count = ids.len(), "tree converted to binary");
    Ok(())
}
