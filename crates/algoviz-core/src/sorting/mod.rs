//! The sorting engine.
//!
//! Four in-place algorithms share one entry point, [`sort_by`], which works on
//! any slice under a caller-supplied three-way comparator. Every comparison,
//! swap and shift is reported to a [`SortObserver`] together with the current
//! buffer and the pseudo-code line being executed, so a front end can animate
//! the run. The whole call is timed with a monotonic clock.
//!
//! | Algorithm | Stable | Worst case |
//! |-----------|--------|------------|
//! | Bubble    | yes    | O(n²)      |
//! | Insertion | yes    | O(n²)      |
//! | Shell     | no     | O(n²) with halving gaps |
//! | Quick     | no     | O(n²), Lomuto partition |

mod bubble;
mod insertion;
mod quick;
mod shell;

use crate::observer::SortObserver;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

/// The sorting algorithms the engine implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// Adjacent-swap passes with early exit.
    Bubble,
    /// Builds a sorted prefix by shifting each element left.
    Insertion,
    /// Gapped insertion sort with gaps n/2, n/4, ..., 1.
    Shell,
    /// Lomuto-partition quicksort with the last element as pivot.
    Quick,
}

impl SortAlgorithm {
    /// All algorithms, in menu order.
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Shell,
        SortAlgorithm::Quick,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Shell => "Shell Sort",
            Self::Quick => "Quick Sort",
        }
    }

    /// Returns `true` for the algorithms whose cost grows quadratically on
    /// random input.
    #[must_use]
    pub const fn is_quadratic(self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion)
    }

    /// Returns `true` if equal elements keep their relative order.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion)
    }

    /// Returns the pseudo-code listing that [`SortStep::line`] indexes into.
    #[must_use]
    pub const fn pseudo_code(self) -> &'static [&'static str] {
        match self {
            Self::Bubble => bubble::PSEUDO_CODE,
            Self::Insertion => insertion::PSEUDO_CODE,
            Self::Shell => shell::PSEUDO_CODE,
            Self::Quick => quick::PSEUDO_CODE,
        }
    }

    /// Parses a name such as `"bubble"` or `"quick"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bubble" => Some(Self::Bubble),
            "insertion" => Some(Self::Insertion),
            "shell" => Some(Self::Shell),
            "quick" | "quicksort" => Some(Self::Quick),
            _ => None,
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened at an instrumentation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEvent {
    /// Two positions were compared.
    Compare {
        /// Left position.
        left: usize,
        /// Right position.
        right: usize,
    },
    /// Two positions exchanged their elements.
    Swap {
        /// Left position.
        left: usize,
        /// Right position.
        right: usize,
    },
    /// An element moved from `from` to `to` while opening a gap.
    Shift {
        /// Source position.
        from: usize,
        /// Destination position.
        to: usize,
    },
    /// A bubble pass finished.
    PassEnd {
        /// One-based pass number.
        pass: usize,
        /// Whether the pass swapped anything.
        swapped: bool,
    },
    /// A pivot reached its final position.
    PivotPlaced {
        /// Final position of the pivot.
        index: usize,
    },
}

/// A single observed step: the event and the pseudo-code line it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortStep {
    /// The event.
    pub event: SortEvent,
    /// Zero-based index into [`SortAlgorithm::pseudo_code`].
    pub line: u8,
}

/// Operation counters gathered during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// Element comparisons.
    pub comparisons: u64,
    /// Element exchanges.
    pub swaps: u64,
    /// Single-position moves made by insertion and shell sort.
    pub shifts: u64,
    /// Bubble passes, or gap rounds for shell sort.
    pub passes: u64,
}

/// Result of a sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOutcome {
    /// Wall time of the run in nanoseconds.
    pub elapsed_ns: u64,
    /// Operation counters.
    pub stats: SortStats,
}

/// Shared state threaded through one run.
pub(crate) struct Run<'a, T, C, O: ?Sized> {
    pub(crate) data: &'a mut [T],
    compare: C,
    observer: &'a mut O,
    pub(crate) stats: SortStats,
}

impl<T, C, O> Run<'_, T, C, O>
where
    C: FnMut(&T, &T) -> Ordering,
    O: SortObserver<T> + ?Sized,
{
    /// Returns `true` if `data[a]` sorts strictly after `data[b]`.
    #[inline]
    pub(crate) fn greater(&mut self, a: usize, b: usize, line: u8) -> bool {
        self.stats.comparisons += 1;
        let ord = (self.compare)(&self.data[a], &self.data[b]);
        self.emit(SortEvent::Compare { left: a, right: b }, line);
        ord == Ordering::Greater
    }

    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize, line: u8) {
        self.stats.swaps += 1;
        self.data.swap(a, b);
        self.emit(SortEvent::Swap { left: a, right: b }, line);
    }

    /// Moves the element at `from` one step to `to`, which must be adjacent
    /// in the gapped sequence being sorted.
    #[inline]
    pub(crate) fn shift(&mut self, from: usize, to: usize, line: u8) {
        self.stats.shifts += 1;
        self.data.swap(from, to);
        self.emit(SortEvent::Shift { from, to }, line);
    }

    #[inline]
    pub(crate) fn emit(&mut self, event: SortEvent, line: u8) {
        self.observer.on_step(SortStep { event, line }, self.data);
    }
}

/// Sorts `data` in place with `algorithm`, ordering elements by `compare`.
///
/// The observer sees every comparison, swap and shift. An empty buffer
/// returns immediately with a zero outcome and the observer is never called.
pub fn sort_by<T, C, O>(
    data: &mut [T],
    algorithm: SortAlgorithm,
    compare: C,
    observer: &mut O,
) -> SortOutcome
where
    C: FnMut(&T, &T) -> Ordering,
    O: SortObserver<T> + ?Sized,
{
    if data.is_empty() {
        return SortOutcome::default();
    }

    let start = Instant::now();
    let mut run = Run {
        data,
        compare,
        observer,
        stats: SortStats::default(),
    };
    match algorithm {
        SortAlgorithm::Bubble => bubble::sort(&mut run),
        SortAlgorithm::Insertion => insertion::sort(&mut run),
        SortAlgorithm::Shell => shell::sort(&mut run),
        SortAlgorithm::Quick => quick::sort(&mut run),
    }
    let elapsed_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

    SortOutcome {
        elapsed_ns,
        stats: run.stats,
    }
}
