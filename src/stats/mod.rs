//! Statistics module
//!
//! Sampling and summary functionality for survey frames: simple random
//! sampling without replacement, proportional stratified allocation with an
//! exact-total guarantee, per-stratum draws, and descriptive summaries for
//! numeric and categorical columns.

pub mod categorical;
pub mod descriptive;
pub mod sampling;

use serde::Serialize;

use crate::core::error::Result;
use crate::frame::Frame;

/// Default seed for reproducible draws
///
/// All sampling functions take the seed explicitly; this constant is a
/// convenient fixed choice when no seed policy exists yet.
pub const DEFAULT_SEED: u64 = 42;

/// Structure holding descriptive statistics results
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// Number of data points
    pub count: usize,
    /// Mean value
    pub mean: f64,
    /// Standard deviation (unbiased estimator)
    pub std: f64,
    /// Minimum value
    pub min: f64,
    /// 25% quantile
    pub q1: f64,
    /// Median (50% quantile)
    pub median: f64,
    /// 75% quantile
    pub q3: f64,
    /// Maximum value
    pub max: f64,
}

/// One row of a stratified allocation table
///
/// Serializes with the conventional survey column names `Nh` (stratum
/// population) and `nh` (allocated sample size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StratumAllocation {
    /// Stratum key (value of the stratification column)
    pub stratum: String,
    /// Number of population units in the stratum
    #[serde(rename = "Nh")]
    pub population: usize,
    /// Number of sample units allocated to the stratum
    #[serde(rename = "nh")]
    pub sample_size: usize,
}

/// Result of a stratified sampling run
#[derive(Debug, Clone)]
pub struct StratifiedSample {
    /// Per-stratum allocation, in stratum order
    pub allocation: Vec<StratumAllocation>,
    /// Sampled rows, concatenated in stratum order
    pub sample: Frame,
}

/// Frequency distribution of a categorical column
#[derive(Debug, Clone)]
pub struct FrequencyDistribution {
    /// Category labels, sorted
    pub categories: Vec<String>,
    /// Count per category
    pub counts: Vec<usize>,
    /// Proportion per category (counts / total)
    pub proportions: Vec<f64>,
    /// Total number of observations
    pub total: usize,
}

/// Population-vs-sample proportion for one category
#[derive(Debug, Clone)]
pub struct CategoryComparison {
    /// Category label
    pub category: String,
    /// Share of the category in the population
    pub population_proportion: f64,
    /// Share of the category in the sample
    pub sample_proportion: f64,
}

// Public API functions

/// Calculate descriptive statistics for numeric data
///
/// # Description
/// Computes count, mean, unbiased standard deviation, minimum, quartiles and
/// maximum for a slice of numeric values. Quartiles use linear interpolation
/// between order statistics.
///
/// # Example
/// ```rust
/// use samplrs::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let summary = stats::describe(&data).unwrap();
/// assert_eq!(summary.count, 5);
/// assert!((summary.mean - 3.0).abs() < 1e-10);
/// ```
pub fn describe<T: AsRef<[f64]>>(data: T) -> Result<DescriptiveStats> {
    descriptive::describe_impl(data.as_ref())
}

/// Draw a simple random sample without replacement
///
/// # Description
/// Returns a new frame of exactly `n` distinct rows chosen uniformly at
/// random, in their original frame order. The draw is fully determined by
/// `seed`: the same frame, `n` and seed always yield the same rows.
///
/// # Example
/// ```rust
/// use samplrs::frame::Frame;
/// use samplrs::series::Series;
/// use samplrs::stats;
///
/// let mut frame = Frame::new();
/// let ids: Vec<String> = (0..10).map(|i| i.to_string()).collect();
/// frame.add_column("id".to_string(), Series::new(ids, None).unwrap()).unwrap();
///
/// let sample = stats::sample(&frame, 4, stats::DEFAULT_SEED).unwrap();
/// assert_eq!(sample.row_count(), 4);
/// ```
pub fn sample(frame: &Frame, n: usize, seed: u64) -> Result<Frame> {
    sampling::sample_impl(frame, n, seed)
}

/// Compute a proportional stratified allocation
///
/// # Description
/// Given ordered `(stratum key, population count)` pairs and a total sample
/// size `n`, assigns each stratum an integer sample size proportional to its
/// population share. Shares are rounded half away from zero and the rounding
/// residual is applied to the last stratum, so the allocated sizes always sum
/// to exactly `n`. Strata with zero population are excluded. If the residual
/// correction would push a stratum outside `[0, Nh]`, the allocation is
/// rejected as infeasible.
///
/// # Example
/// ```rust
/// use samplrs::stats;
///
/// let counts = vec![
///     ("A".to_string(), 333),
///     ("B".to_string(), 333),
///     ("C".to_string(), 334),
/// ];
/// let allocation = stats::allocate(&counts, 100).unwrap();
/// let sizes: Vec<usize> = allocation.iter().map(|a| a.sample_size).collect();
/// assert_eq!(sizes, vec![33, 33, 34]);
/// ```
pub fn allocate(strata_counts: &[(String, usize)], n: usize) -> Result<Vec<StratumAllocation>> {
    sampling::allocate_impl(strata_counts, n)
}

/// Draw a proportionally allocated stratified sample
///
/// # Description
/// Partitions the frame on `stratum_column` (strata ordered by key), computes
/// the proportional allocation for `n`, then draws each stratum's share
/// without replacement. Every stratum draw reseeds from `seed`, so repeated
/// runs are identical. Sampled rows are concatenated in stratum order.
///
/// # Example
/// ```rust
/// use samplrs::frame::Frame;
/// use samplrs::series::Series;
/// use samplrs::stats;
///
/// let mut frame = Frame::new();
/// let regions: Vec<String> = ["North", "North", "South", "North", "South"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// frame.add_column("region".to_string(), Series::new(regions, None).unwrap()).unwrap();
///
/// let result = stats::stratified_sample(&frame, "region", 3, stats::DEFAULT_SEED).unwrap();
/// assert_eq!(result.sample.row_count(), 3);
/// ```
pub fn stratified_sample(
    frame: &Frame,
    stratum_column: &str,
    n: usize,
    seed: u64,
) -> Result<StratifiedSample> {
    sampling::stratified_sample_impl(frame, stratum_column, n, seed)
}

/// Compute the frequency distribution of categorical values
///
/// # Example
/// ```rust
/// use samplrs::stats;
///
/// let values: Vec<String> = ["Urban", "Rural", "Urban"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let dist = stats::frequency_distribution(&values).unwrap();
/// assert_eq!(dist.categories, vec!["Rural".to_string(), "Urban".to_string()]);
/// assert_eq!(dist.counts, vec![1, 2]);
/// ```
pub fn frequency_distribution(values: &[String]) -> Result<FrequencyDistribution> {
    categorical::frequency_distribution_impl(values)
}

/// Compare category proportions between a population and a sample
///
/// # Description
/// Computes the proportion of each category in the population and in the
/// sample, over the union of categories, for checking how representative a
/// sample is on an auxiliary variable. Categories absent from one side get
/// proportion 0.
pub fn compare_distributions(
    population: &[String],
    sample: &[String],
) -> Result<Vec<CategoryComparison>> {
    categorical::compare_impl(population, sample)
}
