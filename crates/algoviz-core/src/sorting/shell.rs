//! Shell sort with the halving gap sequence.

use super::Run;
use crate::observer::SortObserver;
use std::cmp::Ordering;

pub(super) const PSEUDO_CODE: &[&str] = &[
    "SHELL_SORT(A):",
    "  gap = n / 2",
    "  while gap > 0:",
    "    for i from gap to n - 1:",
    "      temp = A[i]",
    "      j = i",
    "      while j >= gap and A[j - gap] > temp:",
    "        A[j] = A[j - gap]",
    "        j = j - gap",
    "      A[j] = temp",
    "    gap = gap / 2",
];

pub(super) fn sort<T, C, O>(run: &mut Run<'_, T, C, O>)
where
    C: FnMut(&T, &T) -> Ordering,
    O: SortObserver<T> + ?Sized,
{
    let n = run.data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && run.greater(j - gap, j, 6) {
                run.shift(j - gap, j, 7);
                j -= gap;
            }
        }
        run.stats.passes += 1;
        gap /= 2;
    }
}
