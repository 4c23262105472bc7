//! Sampling module: SRSWOR draws and proportional stratified allocation

use std::collections::HashMap;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::core::error::{Error, Result};
use crate::frame::Frame;
use crate::stats::{StratifiedSample, StratumAllocation};

/// Internal implementation for simple random sampling without replacement
pub(crate) fn sample_impl(frame: &Frame, n: usize, seed: u64) -> Result<Frame> {
    let n_rows = frame.row_count();
    if n_rows == 0 {
        return Err(Error::EmptyData(
            "Cannot sample from an empty frame".into(),
        ));
    }
    if n < 1 || n > n_rows {
        return Err(Error::InvalidParameter(format!(
            "Sample size must be between 1 and {}, got {}",
            n_rows, n
        )));
    }

    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    indices.truncate(n);
    // Keep sampled rows in frame order
    indices.sort_unstable();

    frame.take_rows(&indices)
}

/// Partition frame rows by the values of one column
///
/// Returns `(key, row indices)` per distinct value, ordered by key so that
/// stratum order is deterministic across runs.
pub(crate) fn partition_by(frame: &Frame, column: &str) -> Result<Vec<(String, Vec<usize>)>> {
    let keys = frame.get_column(column)?;

    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, value) in keys.values().iter().enumerate() {
        groups.entry(value.clone()).or_default().push(i);
    }

    let mut strata: Vec<(String, Vec<usize>)> = groups.into_iter().collect();
    strata.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(strata)
}

/// Internal implementation for proportional allocation
///
/// Rounds each stratum's proportional share half away from zero, then applies
/// the whole rounding residual to the last stratum so the sizes sum to `n`
/// exactly. An allocation the correction pushes outside `[0, Nh]` is
/// rejected, never clamped.
pub(crate) fn allocate_impl(
    strata_counts: &[(String, usize)],
    n: usize,
) -> Result<Vec<StratumAllocation>> {
    // Empty strata carry no population share and are left out of the table
    let strata: Vec<&(String, usize)> = strata_counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .collect();

    if strata.is_empty() {
        return Err(Error::EmptyData(
            "Allocation requires at least one non-empty stratum".into(),
        ));
    }

    let total: usize = strata.iter().map(|(_, count)| count).sum();
    if n < 1 || n > total {
        return Err(Error::InvalidParameter(format!(
            "Sample size must be between 1 and {}, got {}",
            total, n
        )));
    }

    let mut allocated: Vec<i64> = strata
        .iter()
        .map(|(_, count)| (n as f64 * *count as f64 / total as f64).round() as i64)
        .collect();

    let residual = n as i64 - allocated.iter().sum::<i64>();
    if let Some(last) = allocated.last_mut() {
        *last += residual;
    }

    let mut result = Vec::with_capacity(strata.len());
    for ((key, count), &size) in strata.iter().zip(&allocated) {
        if size < 0 || size as usize > *count {
            return Err(Error::InfeasibleAllocation {
                stratum: key.clone(),
                allocated: size,
                population: *count,
            });
        }
        result.push(StratumAllocation {
            stratum: key.clone(),
            population: *count,
            sample_size: size as usize,
        });
    }

    Ok(result)
}

/// Internal implementation for stratified sampling
pub(crate) fn stratified_sample_impl(
    frame: &Frame,
    stratum_column: &str,
    n: usize,
    seed: u64,
) -> Result<StratifiedSample> {
    if frame.row_count() == 0 {
        return Err(Error::EmptyData(
            "Cannot sample from an empty frame".into(),
        ));
    }

    let strata = partition_by(frame, stratum_column)?;
    let counts: Vec<(String, usize)> = strata
        .iter()
        .map(|(key, indices)| (key.clone(), indices.len()))
        .collect();
    let allocation = allocate_impl(&counts, n)?;

    // Partitioning never yields empty strata, so allocation rows line up
    // one-to-one with the partition.
    let mut sample_indices = Vec::with_capacity(n);
    for (entry, (_, indices)) in allocation.iter().zip(&strata) {
        let drawn =
            draw_without_replacement(&entry.stratum, indices, entry.sample_size, seed)?;
        sample_indices.extend(drawn);
    }

    let sample = frame.take_rows(&sample_indices)?;
    Ok(StratifiedSample { allocation, sample })
}

/// Draw `size` row indices without replacement from one stratum
///
/// Reseeds from `seed` for every stratum, so each stratum's draw does not
/// depend on how many strata precede it.
fn draw_without_replacement(
    stratum: &str,
    indices: &[usize],
    size: usize,
    seed: u64,
) -> Result<Vec<usize>> {
    if size > indices.len() {
        return Err(Error::InsufficientStratumSize {
            stratum: stratum.to_string(),
            requested: size,
            available: indices.len(),
        });
    }

    let mut pool = indices.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    pool.shuffle(&mut rng);
    pool.truncate(size);
    pool.sort_unstable();
    Ok(pool)
}
