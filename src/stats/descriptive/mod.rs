//! Descriptive statistics module

use crate::core::error::{Error, Result};
use crate::stats::DescriptiveStats;

/// Internal implementation for calculating descriptive statistics
pub(crate) fn describe_impl(data: &[f64]) -> Result<DescriptiveStats> {
    if data.is_empty() {
        return Err(Error::EmptyData(
            "At least one data point is required for descriptive statistics".into(),
        ));
    }

    // NaN or infinity would corrupt the sort order behind min/quartiles/max
    if let Some(bad) = data.iter().find(|v| !v.is_finite()) {
        return Err(Error::InvalidValue(format!(
            "Non-finite value {} in data",
            bad
        )));
    }

    let count = data.len();
    let mean = data.iter().sum::<f64>() / count as f64;

    // Unbiased estimator; a single observation has zero spread
    let variance = if count > 1 {
        data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (count - 1) as f64
    } else {
        0.0
    };

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(DescriptiveStats {
        count,
        mean,
        std: variance.sqrt(),
        min: sorted[0],
        q1: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q3: percentile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Calculate a percentile of sorted data by linear interpolation
fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    let n = sorted_data.len();
    let idx = p * (n - 1) as f64;
    let idx_floor = idx.floor() as usize;
    let idx_ceil = idx.ceil() as usize;

    if idx_floor == idx_ceil {
        return sorted_data[idx_floor];
    }

    let weight_ceil = idx - idx_floor as f64;
    sorted_data[idx_floor] * (1.0 - weight_ceil) + sorted_data[idx_ceil] * weight_ceil
}
