//! Property tests for the sorting engine and the containers built on it.

use algoviz_common::{Value, ValueType};
use algoviz_core::{Array, LinkedList, NoopObserver, SortAlgorithm};
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

fn values_of(value_type: ValueType) -> BoxedStrategy<Vec<Value>> {
    let element: BoxedStrategy<Value> = match value_type {
        ValueType::Integer => any::<i32>().prop_map(Value::Integer).boxed(),
        ValueType::Float => (-1.0e6f32..1.0e6f32).prop_map(Value::Float).boxed(),
        ValueType::Character => (33u8..=126).prop_map(Value::Character).boxed(),
        ValueType::Text => prop::option::weighted(0.9, "[a-z]{0,6}")
            .prop_map(Value::Text)
            .boxed(),
    };
    prop::collection::vec(element, 0..120).boxed()
}

fn typed_values() -> impl Strategy<Value = (ValueType, Vec<Value>)> {
    prop::sample::select(ValueType::ALL.to_vec())
        .prop_flat_map(|ty| values_of(ty).prop_map(move |v| (ty, v)))
}

fn algorithm() -> impl Strategy<Value = SortAlgorithm> {
    prop::sample::select(SortAlgorithm::ALL.to_vec())
}

fn reference_sorted(values: &[Value]) -> Vec<Value> {
    let mut expected = values.to_vec();
    expected.sort_by(Value::compare);
    expected
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_sort_orders_and_permutes((ty, values) in typed_values(), algo in algorithm()) {
        let mut arr = Array::from_values(ty, values.clone()).unwrap();
        arr.sort(algo, &mut NoopObserver);

        prop_assert!(arr.is_sorted());
        // Same multiset: sorted reference and output agree element-wise
        // under the comparator.
        let expected = reference_sorted(&values);
        prop_assert_eq!(arr.len(), expected.len());
        for (got, want) in arr.as_slice().iter().zip(&expected) {
            prop_assert!(got.compare(want).is_eq());
        }
    }

    #[test]
    fn prop_sorting_twice_is_identity((ty, values) in typed_values(), algo in algorithm()) {
        let mut arr = Array::from_values(ty, values).unwrap();
        arr.sort(algo, &mut NoopObserver);
        let once = arr.clone();
        arr.sort(algo, &mut NoopObserver);
        prop_assert_eq!(arr, once);
    }

    #[test]
    fn prop_bubble_on_sorted_never_swaps((ty, values) in typed_values()) {
        let mut arr = Array::from_values(ty, reference_sorted(&values)).unwrap();
        let outcome = arr.sort(SortAlgorithm::Bubble, &mut NoopObserver);
        prop_assert_eq!(outcome.stats.swaps, 0);
        prop_assert!(outcome.stats.passes <= 1);
    }

    #[test]
    fn prop_list_sort_matches_array_sort(
        values in prop::collection::vec(any::<i32>(), 0..80),
        doubly in any::<bool>(),
        algo in algorithm(),
    ) {
        let values: Vec<Value> = values.into_iter().map(Value::Integer).collect();
        let mut list = LinkedList::new(ValueType::Integer, doubly);
        for v in &values {
            list.push_back(v.clone());
        }
        let mut arr = Array::from_values(ValueType::Integer, values).unwrap();

        list.sort(algo, &mut NoopObserver);
        arr.sort(algo, &mut NoopObserver);
        prop_assert_eq!(list.to_vec(), arr.into_values());
    }
}
