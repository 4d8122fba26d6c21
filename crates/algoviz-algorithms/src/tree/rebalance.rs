//! Rebuilds a tree as a height-balanced BST.

use super::{Traversal, traverse};
use algoviz_common::{Result, TreeNodeId, Value};
use algoviz_core::containers::Side;
use algoviz_core::{Tree, TreeShape};

/// Collects every value, sorts them with the type's comparator and rebuilds
/// the tree as a height-balanced BST. The tree is binary afterwards whatever
/// its previous shape.
///
/// Each subtree is rooted at the middle element `(start + end) / 2` of its
/// sorted range.
///
/// # Errors
///
/// Never fails for a well-formed tree.
pub fn rebalance(tree: &mut Tree) -> Result<()> {
    let mut values: Vec<Value> = traverse(tree, Traversal::PreOrder)
        .into_iter()
        .filter_map(|id| tree.value(id).cloned())
        .collect();
    values.sort_by(Value::compare);

    tree.reset(TreeShape::Binary);
    let mut slots: Vec<Option<Value>> = values.into_iter().map(Some).collect();
    let len = slots.len();
    build(tree, &mut slots, 0, len, None)?;
    tracing::debug!(count = len, "tree rebalanced");
    Ok(())
}

/// Builds the half-open range `[start, end)` under `parent`.
fn build(
    tree: &mut Tree,
    values: &mut [Option<Value>],
    start: usize,
    end: usize,
    parent: Option<(TreeNodeId, Side)>,
) -> Result<()> {
    if start >= end {
        return Ok(());
    }
    let mid = (start + end - 1) / 2;
    let Some(value) = values[mid].take() else {
        return Ok(());
    };
    let id = match parent {
        None => tree.insert_root(value)?,
        Some((p, side)) => tree.attach_binary(p, side, value)?,
    };
    build(tree, values, start, mid, Some((id, Side::Left)))?;
    build(tree, values, mid + 1, end, Some((id, Side::Right)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{depth, insert, traversal_text};
    use algoviz_common::ValueType;

    #[test]
    fn test_rebalance_example() {
        let mut tree = Tree::new(ValueType::Integer, TreeShape::Binary);
        for v in [10, 5, 15, 3, 7] {
            insert(&mut tree, Value::Integer(v)).unwrap();
        }
        rebalance(&mut tree).unwrap();
        assert_eq!(traversal_text(&tree, Traversal::InOrder), "3 5 7 10 15");
        assert_eq!(traversal_text(&tree, Traversal::PreOrder), "7 3 5 10 15");
        assert_eq!(depth(&tree), 3);
    }

    #[test]
    fn test_rebalance_chain() {
        let mut tree = Tree::new(ValueType::Integer, TreeShape::Binary);
        for v in 1..=15 {
            insert(&mut tree, Value::Integer(v)).unwrap();
        }
        assert_eq!(depth(&tree), 15);
        rebalance(&mut tree).unwrap();
        assert_eq!(depth(&tree), 4);
        assert_eq!(tree.len(), 15);
    }

    #[test]
    fn test_rebalance_nary_becomes_binary() {
        let mut tree = Tree::new(ValueType::Text, TreeShape::Nary { degree: 4 });
        for w in ["pear", "fig", "apple", "kiwi", "lime"] {
            insert(&mut tree, Value::text(w)).unwrap();
        }
        rebalance(&mut tree).unwrap();
        assert!(tree.shape().is_binary());
        assert_eq!(traversal_text(&tree, Traversal::InOrder), "apple fig kiwi lime pear");
    }

    #[test]
    fn test_rebalance_empty() {
        let mut tree = Tree::new(ValueType::Integer, TreeShape::Nary { degree: 3 });
        rebalance(&mut tree).unwrap();
        assert!(tree.is_empty());
        assert!(tree.shape().is_binary());
    }
}
