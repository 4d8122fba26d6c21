//! Property tests for the tree algorithms.

use algoviz_algorithms::tree::{
    convert_to_binary, depth, insert, rebalance, traversal_text, traverse,
};
use algoviz_algorithms::Traversal;
use algoviz_common::{Value, ValueType};
use algoviz_core::{Tree, TreeShape};
use proptest::prelude::*;

fn build(shape: TreeShape, values: &[i32]) -> Tree {
    let mut tree = Tree::new(ValueType::Integer, shape);
    for &v in values {
        insert(&mut tree, Value::Integer(v)).unwrap();
    }
    tree
}

proptest! {
    #[test]
    fn prop_lcrs_preserves_preorder(
        degree in 1usize..5,
        values in prop::collection::vec(0i32..100, 0..60),
    ) {
        let mut tree = build(TreeShape::Nary { degree }, &values);
        let before = traversal_text(&tree, Traversal::PreOrder);
        convert_to_binary(&mut tree).unwrap();
        prop_assert!(tree.shape().is_binary());
        prop_assert_eq!(traversal_text(&tree, Traversal::PreOrder), before);
        prop_assert_eq!(tree.len(), values.len());
    }

    #[test]
    fn prop_rebalance_is_idempotent(values in prop::collection::vec(-50i32..50, 0..80)) {
        let mut tree = build(TreeShape::Binary, &values);
        rebalance(&mut tree).unwrap();
        let once = (traversal_text(&tree, Traversal::InOrder), depth(&tree));
        rebalance(&mut tree).unwrap();
        let twice = (traversal_text(&tree, Traversal::InOrder), depth(&tree));
        prop_assert_eq!(&once, &twice);

        // Balanced: depth is the minimum for the node count.
        let n = values.len();
        let optimal = usize::BITS as usize - n.leading_zeros() as usize;
        prop_assert_eq!(once.1, optimal);
    }

    #[test]
    fn prop_bst_inorder_is_sorted(values in prop::collection::vec(any::<i32>(), 0..80)) {
        let tree = build(TreeShape::Binary, &values);
        let inorder: Vec<i32> = traverse(&tree, Traversal::InOrder)
            .into_iter()
            .filter_map(|id| tree.value(id).and_then(Value::as_integer))
            .collect();
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(inorder, expected);
    }

    #[test]
    fn prop_every_order_visits_every_node(
        degree in 2usize..5,
        nary in any::<bool>(),
        values in prop::collection::vec(0i32..1000, 0..50),
    ) {
        let shape = if nary { TreeShape::Nary { degree } } else { TreeShape::Binary };
        let tree = build(shape, &values);
        for order in Traversal::ALL {
            let mut ids = traverse(&tree, order);
            prop_assert_eq!(ids.len(), values.len());
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), values.len());
        }
    }
}
