//! Quicksort with Lomuto partitioning.
//!
//! Subranges are processed depth-first, left before right, from an explicit
//! work stack. The step sequence matches the recursive formulation while the
//! native stack stays flat on already-sorted input.

use super::{Run, SortEvent};
use crate::observer::SortObserver;
use std::cmp::Ordering;

pub(super) const PSEUDO_CODE: &[&str] = &[
    "QUICK_SORT(A, low, high):",
    "  if low < high:",
    "    p = PARTITION(A, low, high)",
    "    QUICK_SORT(A, low, p - 1)",
    "    QUICK_SORT(A, p + 1, high)",
    "",
    "PARTITION(A, low, high):",
    "  pivot = A[high]",
    "  i = low",
    "  for j from low to high - 1:",
    "    if A[j] <= pivot:",
    "      swap(A[i], A[j])",
    "      i = i + 1",
    "  swap(A[i], A[high])",
    "  return i",
];

pub(super) fn sort<T, C, O>(run: &mut Run<'_, T, C, O>)
where
    C: FnMut(&T, &T) -> Ordering,
    O: SortObserver<T> + ?Sized,
{
    let mut pending = vec![(0, run.data.len() - 1)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let p = partition(run, low, high);
        // Pushed in reverse so the left range is handled first.
        pending.push((p + 1, high));
        if p > 0 {
            pending.push((low, p - 1));
        }
    }
}

fn partition<T, C, O>(run: &mut Run<'_, T, C, O>, low: usize, high: usize) -> usize
where
    C: FnMut(&T, &T) -> Ordering,
    O: SortObserver<T> + ?Sized,
{
    let mut i = low;
    for j in low..high {
        if !run.greater(j, high, 10) {
            if i != j {
                run.swap(i, j, 11);
            }
            i += 1;
        }
    }
    if i != high {
        run.swap(i, high, 13);
    }
    run.emit(SortEvent::PivotPlaced { index: i }, 14);
    i
}

#[cfg(test)]
mod tests {
    use crate::observer::NoopObserver;
    use crate::sorting::{SortAlgorithm, SortEvent, SortStep, sort_by};

    #[test]
    fn test_pivot_at_zero() {
        // The smallest element as last pivot lands at index 0.
        let mut data = vec![5, 4, 3, 0];
        sort_by(&mut data, SortAlgorithm::Quick, i32::cmp, &mut NoopObserver);
        assert_eq!(data, vec![0, 3, 4, 5]);
    }

    #[test]
    fn test_first_pivot_position() {
        let mut data = vec![3, 7, 1, 4];
        let mut pivots = Vec::new();
        sort_by(
            &mut data,
            SortAlgorithm::Quick,
            i32::cmp,
            &mut |step: SortStep, _: &[i32]| {
                if let SortEvent::PivotPlaced { index } = step.event {
                    pivots.push(index);
                }
            },
        );
        assert_eq!(data, vec![1, 3, 4, 7]);
        // 4 is the first pivot and ends at index 2
        assert_eq!(pivots[0], 2);
    }

    #[test]
    fn test_large_sorted_input() {
        let mut data: Vec<i32> = (0..5000).collect();
        sort_by(&mut data, SortAlgorithm::Quick, i32::cmp, &mut NoopObserver);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }
}
