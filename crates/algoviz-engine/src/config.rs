//! Engine configuration.

use algoviz_common::{Error, Result};
use algoviz_core::TreeShape;
use algoviz_core::containers::{ARRAY_STYLED_LIMIT, DEFAULT_NARY_DEGREE, LIST_STYLED_LIMIT};

/// Default number of benchmark sample sizes.
pub const DEFAULT_BENCHMARK_SAMPLES: usize = 5;

/// Smallest maximum size a benchmark accepts.
pub const DEFAULT_BENCHMARK_MIN_SIZE: usize = 100;

/// Largest maximum size a benchmark accepts.
pub const DEFAULT_BENCHMARK_MAX_SIZE: usize = 15_000;

/// Size above which bubble and insertion sort are skipped in benchmarks.
pub const DEFAULT_QUADRATIC_SIZE_LIMIT: usize = 20_000;

/// Settings for a [`Session`](crate::Session).
///
/// # Examples
///
/// ```
/// use algoviz_engine::Config;
///
/// let config = Config::default().with_seed(7).with_nary_tree(4);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for random generation. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Shape of newly created trees.
    pub tree_shape: TreeShape,
    /// Array length above which rendering drops accent hints.
    pub array_styled_limit: usize,
    /// List length above which rendering drops accent hints.
    pub list_styled_limit: usize,
    /// Number of sizes a benchmark samples.
    pub benchmark_samples: usize,
    /// Lower clamp for a benchmark's maximum size.
    pub benchmark_min_size: usize,
    /// Upper clamp for a benchmark's maximum size.
    pub benchmark_max_size: usize,
    /// Sizes above this skip the quadratic sorts.
    pub quadratic_size_limit: usize,
    /// Most simple paths a path query enumerates.
    pub path_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tree_shape: TreeShape::Binary,
            array_styled_limit: ARRAY_STYLED_LIMIT,
            list_styled_limit: LIST_STYLED_LIMIT,
            benchmark_samples: DEFAULT_BENCHMARK_SAMPLES,
            benchmark_min_size: DEFAULT_BENCHMARK_MIN_SIZE,
            benchmark_max_size: DEFAULT_BENCHMARK_MAX_SIZE,
            quadratic_size_limit: DEFAULT_QUADRATIC_SIZE_LIMIT,
            path_limit: algoviz_algorithms::graph::DEFAULT_PATH_LIMIT,
        }
    }
}

impl Config {
    /// Fixes the random seed so generated structures repeat run to run.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates binary search trees.
    #[must_use]
    pub fn with_binary_tree(mut self) -> Self {
        self.tree_shape = TreeShape::Binary;
        self
    }

    /// Creates N-ary trees with the given maximum degree.
    #[must_use]
    pub fn with_nary_tree(mut self, degree: usize) -> Self {
        self.tree_shape = TreeShape::Nary { degree };
        self
    }

    /// Creates N-ary trees with the default degree of 3.
    #[must_use]
    pub fn with_default_nary_tree(self) -> Self {
        self.with_nary_tree(DEFAULT_NARY_DEGREE)
    }

    /// Sets the rendering limits for arrays and lists.
    #[must_use]
    pub fn with_styled_limits(mut self, array: usize, list: usize) -> Self {
        self.array_styled_limit = array;
        self.list_styled_limit = list;
        self
    }

    /// Sets how many sizes a benchmark samples.
    #[must_use]
    pub fn with_benchmark_samples(mut self, samples: usize) -> Self {
        self.benchmark_samples = samples;
        self
    }

    /// Sets the clamp range for a benchmark's maximum size.
    #[must_use]
    pub fn with_benchmark_range(mut self, min: usize, max: usize) -> Self {
        self.benchmark_min_size = min;
        self.benchmark_max_size = max;
        self
    }

    /// Sets the size above which quadratic sorts are skipped.
    #[must_use]
    pub fn with_quadratic_size_limit(mut self, limit: usize) -> Self {
        self.quadratic_size_limit = limit;
        self
    }

    /// Sets how many simple paths a path query enumerates.
    #[must_use]
    pub fn with_path_limit(mut self, limit: usize) -> Self {
        self.path_limit = limit;
        self
    }

    /// Checks the settings for consistency.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for zero benchmark samples, a zero
    /// N-ary degree, or a benchmark minimum above the maximum.
    pub fn validate(&self) -> Result<()> {
        if self.benchmark_samples == 0 {
            return Err(Error::InvalidConfig(
                "benchmark_samples must be at least 1".to_string(),
            ));
        }
        self.tree_shape.validate()?;
        if self.benchmark_min_size > self.benchmark_max_size {
            return Err(Error::InvalidConfig(format!(
                "benchmark_min_size {} exceeds benchmark_max_size {}",
                self.benchmark_min_size, self.benchmark_max_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.tree_shape, TreeShape::Binary);
        assert_eq!(config.array_styled_limit, 3000);
        assert_eq!(config.list_styled_limit, 1000);
        assert_eq!(config.benchmark_samples, 5);
        assert_eq!(config.benchmark_min_size, 100);
        assert_eq!(config.benchmark_max_size, 15_000);
        assert_eq!(config.quadratic_size_limit, 20_000);
        assert_eq!(config.path_limit, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::default()
            .with_seed(42)
            .with_default_nary_tree()
            .with_benchmark_samples(3)
            .with_path_limit(10);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tree_shape, TreeShape::Nary { degree: 3 });
        assert_eq!(config.benchmark_samples, 3);
        assert_eq!(config.path_limit, 10);
    }

    #[test]
    fn test_validate_rejects() {
        let zero_samples = Config::default().with_benchmark_samples(0);
        assert!(matches!(zero_samples.validate(), Err(Error::InvalidConfig(_))));

        let zero_degree = Config::default().with_nary_tree(0);
        assert!(matches!(zero_degree.validate(), Err(Error::InvalidConfig(_))));

        let inverted = Config::default().with_benchmark_range(500, 100);
        assert!(matches!(inverted.validate(), Err(Error::InvalidConfig(_))));
    }
}
