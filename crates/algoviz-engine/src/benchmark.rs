//! Sort benchmarking.
//!
//! A benchmark picks a maximum size, derives evenly spaced sample sizes up to
//! it, and times every sort algorithm on freshly randomized data at each size.
//! Runs pass [`NoopObserver`], so nothing but the algorithm is measured.

use crate::config::Config;
use algoviz_common::{Result, ValueGenerator, ValueType};
use algoviz_core::{Array, LinkedList, NoopObserver, SortAlgorithm};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which container the benchmark sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureMode {
    /// Contiguous array.
    #[default]
    Array,
    /// Singly linked list.
    List,
}

impl StructureMode {
    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::List => "list",
        }
    }
}

impl fmt::Display for StructureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One timed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformancePoint {
    /// Number of elements sorted.
    pub size: usize,
    /// Sort time in nanoseconds; 0 when skipped.
    pub elapsed_ns: u64,
    /// Set when the algorithm was not run at this size.
    pub skipped: bool,
}

/// All samples of one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCurve {
    /// The algorithm timed.
    pub algorithm: SortAlgorithm,
    /// Samples in increasing size order.
    pub points: Vec<PerformancePoint>,
}

impl ComparisonCurve {
    /// Returns the slowest sample time.
    #[must_use]
    pub fn max_elapsed_ns(&self) -> u64 {
        self.points.iter().map(|p| p.elapsed_ns).max().unwrap_or(0)
    }
}

/// Times every sort algorithm across a range of sizes.
#[derive(Debug)]
pub struct BenchmarkHarness<'a> {
    config: &'a Config,
    generator: &'a mut ValueGenerator,
}

impl<'a> BenchmarkHarness<'a> {
    /// Creates a harness drawing data from `generator`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `config` fails validation.
    pub fn new(config: &'a Config, generator: &'a mut ValueGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, generator })
    }

    /// Clamps a requested maximum size to the configured range.
    #[must_use]
    pub fn clamp_size(&self, max_size: usize) -> usize {
        max_size.clamp(self.config.benchmark_min_size, self.config.benchmark_max_size)
    }

    /// Returns the sample sizes for a requested maximum: `max * (i + 1) / n`
    /// for each of the `n` configured samples.
    #[must_use]
    pub fn sample_sizes(&self, max_size: usize) -> Vec<usize> {
        let max = self.clamp_size(max_size);
        let samples = self.config.benchmark_samples;
        (0..samples).map(|i| max * (i + 1) / samples).collect()
    }

    /// Returns `true` if `algorithm` is not run at `size`.
    #[must_use]
    pub fn should_skip(&self, algorithm: SortAlgorithm, size: usize) -> bool {
        algorithm.is_quadratic() && size > self.config.quadratic_size_limit
    }

    /// Runs the benchmark.
    pub fn run(&mut self, max_size: usize, mode: StructureMode, value_type: ValueType) -> Vec<ComparisonCurve> {
        self.run_with_progress(max_size, mode, value_type, |_, _| {})
    }

    /// Runs the benchmark, calling `progress(done, total)` after every sample.
    pub fn run_with_progress<F>(
        &mut self,
        max_size: usize,
        mode: StructureMode,
        value_type: ValueType,
        mut progress: F,
    ) -> Vec<ComparisonCurve>
    where
        F: FnMut(usize, usize),
    {
        let sizes = self.sample_sizes(max_size);
        let total = sizes.len() * SortAlgorithm::ALL.len();
        let mut done = 0;

        let mut curves = Vec::with_capacity(SortAlgorithm::ALL.len());
        for algorithm in SortAlgorithm::ALL {
            let mut points = Vec::with_capacity(sizes.len());
            for &size in &sizes {
                points.push(self.sample(algorithm, size, mode, value_type));
                done += 1;
                progress(done, total);
            }
            curves.push(ComparisonCurve { algorithm, points });
        }

        tracing::info!(
            max_size = sizes.last().copied().unwrap_or(0),
            mode = mode.name(),
            value_type = value_type.name(),
            samples = total,
            "benchmark finished"
        );
        curves
    }

    fn sample(
        &mut self,
        algorithm: SortAlgorithm,
        size: usize,
        mode: StructureMode,
        value_type: ValueType,
    ) -> PerformancePoint {
        if self.should_skip(algorithm, size) {
            tracing::debug!(algorithm = algorithm.name(), size, "benchmark sample skipped");
            return PerformancePoint {
                size,
                elapsed_ns: 0,
                skipped: true,
            };
        }
        let outcome = match mode {
            StructureMode::Array => {
                let mut array = Array::new(value_type, size);
                array.fill_random(self.generator);
                array.sort(algorithm, &mut NoopObserver)
            }
            StructureMode::List => {
                let mut list = LinkedList::new(value_type, false);
                list.fill_random(size, self.generator);
                list.sort(algorithm, &mut NoopObserver)
            }
        };
        PerformancePoint {
            size,
            elapsed_ns: outcome.elapsed_ns,
            skipped: false,
        }
    }
}
