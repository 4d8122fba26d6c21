//! Step observers.
//!
//! Algorithms call an observer at their instrumentation points (every
//! comparison, swap or shift for sorts; every visit or relaxation for tree and
//! graph algorithms). The call is synchronous: the algorithm resumes exactly
//! where it left off once the observer returns. An observer cannot alter or
//! abort the run.
//!
//! Closures work as observers directly:
//!
//! ```
//! use algoviz_core::observer::SortObserver;
//! use algoviz_core::sorting::{sort_by, SortAlgorithm, SortStep};
//!
//! let mut data = [3, 1, 2];
//! let mut steps = 0;
//! let mut count = |_: SortStep, _: &[i32]| steps += 1;
//! sort_by(&mut data, SortAlgorithm::Bubble, |a, b| a.cmp(b), &mut count);
//! assert_eq!(data, [1, 2, 3]);
//! assert!(steps > 0);
//! ```
//!
//! Benchmark runs pass [`NoopObserver`], which compiles down to nothing, so the
//! measured time reflects only the algorithm.

use crate::sorting::SortStep;

/// Receives sort steps together with a view of the buffer being sorted.
pub trait SortObserver<T> {
    /// Called after each comparison, swap or shift.
    fn on_step(&mut self, step: SortStep, data: &[T]);
}

impl<T, F> SortObserver<T> for F
where
    F: FnMut(SortStep, &[T]),
{
    #[inline]
    fn on_step(&mut self, step: SortStep, data: &[T]) {
        self(step, data);
    }
}

/// Receives algorithm events of type `E`.
pub trait Observer<E> {
    /// Called at each instrumentation point.
    fn on_event(&mut self, event: E);
}

impl<E, F> Observer<E> for F
where
    F: FnMut(E),
{
    #[inline]
    fn on_event(&mut self, event: E) {
        self(event);
    }
}

/// An observer that ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<T> SortObserver<T> for NoopObserver {
    #[inline(always)]
    fn on_step(&mut self, _step: SortStep, _data: &[T]) {}
}

impl<E> Observer<E> for NoopObserver {
    #[inline(always)]
    fn on_event(&mut self, _event: E) {}
}
