//! Benchmark configuration.

/// Configuration for benchmark runs.
///
/// # Examples
///
/// ```
/// use meadowfield::benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::default()
///     .with_trials(1000)
///     .with_parcel_count(5);
/// assert_eq!(config.trials(), 1000);
/// assert_eq!(config.parcel_count(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    trials: usize,
    parcel_count: usize,
}

impl Default for BenchmarkConfig {
    /// 100 trials of 5 parcels each.
    fn default() -> Self {
        Self {
            trials: 100,
            parcel_count: 5,
        }
    }
}

impl BenchmarkConfig {
    /// Sets the number of random initial states to run.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets how many parcels each random state starts with.
    pub fn with_parcel_count(mut self, parcel_count: usize) -> Self {
        self.parcel_count = parcel_count;
        self
    }

    /// Number of trials per benchmark.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Parcels per random initial state.
    pub fn parcel_count(&self) -> usize {
        self.parcel_count
    }
}
