//! Insertion sort.
//!
//! The element being inserted travels left one position per shift, so every
//! snapshot the observer sees is a permutation of the input.

use super::Run;
use crate::observer::SortObserver;
use std::cmp::Ordering;

pub(super) const PSEUDO_CODE: &[&str] = &[
    "INSERTION_SORT(A):",
    "  for i from 1 to n - 1:",
    "    key = A[i]",
    "    j = i",
    "    while j > 0 and A[j - 1] > key:",
    "      A[j] = A[j - 1]",
    "      j = j - 1",
    "    A[j] = key",
];

pub(super) fn sort<T, C, O>(run: &mut Run<'_, T, C, O>)
where
    C: FnMut(&T, &T) -> Ordering,
    O: SortObserver<T> + ?Sized,
{
    let n = run.data.len();
    for i in 1..n {
        let mut j = i;
        while j > 0 && run.greater(j - 1, j, 4) {
            run.shift(j - 1, j, 5);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::observer::NoopObserver;
    use crate::sorting::{SortAlgorithm, sort_by};

    #[test]
    fn test_shift_count_equals_inversions() {
        // [3, 1, 2] has two inversions: (3,1) and (3,2)
        let mut data = vec![3, 1, 2];
        let outcome = sort_by(&mut data, SortAlgorithm::Insertion, i32::cmp, &mut NoopObserver);
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(outcome.stats.shifts, 2);
        assert_eq!(outcome.stats.swaps, 0);
    }

    #[test]
    fn test_strings() {
        let mut data = vec!["pear", "apple", "fig"];
        sort_by(&mut data, SortAlgorithm::Insertion, |a, b| a.cmp(b), &mut NoopObserver);
        assert_eq!(data, vec!["apple", "fig", "pear"]);
    }
}
