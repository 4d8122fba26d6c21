//! Bubble sort with early exit.

use super::{Run, SortEvent};
use crate::observer::SortObserver;
use std::cmp::Ordering;

pub(super) const PSEUDO_CODE: &[&str] = &[
    "BUBBLE_SORT(A):",
    "  n = length(A)",
    "  for i from 0 to n - 2:",
    "    swapped = false",
    "    for j from 0 to n - i - 2:",
    "      if A[j] > A[j + 1]:",
    "        swap(A[j], A[j + 1])",
    "        swapped = true",
    "    if not swapped: stop",
];

pub(super) fn sort<T, C, O>(run: &mut Run<'_, T, C, O>)
where
    C: FnMut(&T, &T) -> Ordering,
    O: SortObserver<T> + ?Sized,
{
    let n = run.data.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if run.greater(j, j + 1, 5) {
                run.swap(j, j + 1, 6);
                swapped = true;
            }
        }
        run.stats.passes += 1;
        run.emit(
            SortEvent::PassEnd {
                pass: i + 1,
                swapped,
            },
            8,
        );
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::observer::NoopObserver;
    use crate::sorting::{SortAlgorithm, SortEvent, SortStep, sort_by};

    #[test]
    fn test_small_example() {
        let mut data = vec![5, 3, 8, 1];
        let outcome = sort_by(&mut data, SortAlgorithm::Bubble, i32::cmp, &mut NoopObserver);
        assert_eq!(data, vec![1, 3, 5, 8]);
        assert_eq!(outcome.stats.passes, 3);
        assert_eq!(outcome.stats.swaps, 4);
    }

    #[test]
    fn test_sorted_input_stops_after_one_pass() {
        let mut data = vec![1, 2, 3, 4, 5];
        let outcome = sort_by(&mut data, SortAlgorithm::Bubble, i32::cmp, &mut NoopObserver);
        assert_eq!(outcome.stats.passes, 1);
        assert_eq!(outcome.stats.swaps, 0);
        assert_eq!(outcome.stats.comparisons, 4);
    }

    #[test]
    fn test_pass_events_report_swaps() {
        let mut data = vec![2, 1, 3];
        let mut passes = Vec::new();
        sort_by(
            &mut data,
            SortAlgorithm::Bubble,
            i32::cmp,
            &mut |step: SortStep, _: &[i32]| {
                if let SortEvent::PassEnd { pass, swapped } = step.event {
                    passes.push((pass, swapped));
                }
            },
        );
        assert_eq!(passes, vec![(1, true), (2, false)]);
    }
}
