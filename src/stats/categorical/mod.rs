//! Statistics module for categorical data
//!
//! Frequency distributions and population-vs-sample proportion comparison,
//! used to check how representative a drawn sample is on an auxiliary
//! categorical variable.

use std::collections::{BTreeSet, HashMap};

use crate::core::error::{Error, Result};
use crate::stats::{CategoryComparison, FrequencyDistribution};

/// Internal implementation for frequency distributions
pub(crate) fn frequency_distribution_impl(values: &[String]) -> Result<FrequencyDistribution> {
    if values.is_empty() {
        return Err(Error::EmptyData(
            "Frequency distribution requires at least one value".into(),
        ));
    }

    let counts_by_category = count_categories(values);

    let mut categories: Vec<String> = counts_by_category.keys().cloned().collect();
    categories.sort();

    let total = values.len();
    let counts: Vec<usize> = categories
        .iter()
        .map(|category| counts_by_category[category])
        .collect();
    let proportions: Vec<f64> = counts
        .iter()
        .map(|&count| count as f64 / total as f64)
        .collect();

    Ok(FrequencyDistribution {
        categories,
        counts,
        proportions,
        total,
    })
}

/// Internal implementation for population-vs-sample comparison
///
/// Works over the union of categories so a category missing from one side
/// shows up with proportion 0 instead of disappearing from the table.
pub(crate) fn compare_impl(
    population: &[String],
    sample: &[String],
) -> Result<Vec<CategoryComparison>> {
    if population.is_empty() {
        return Err(Error::EmptyData(
            "Comparison requires population values".into(),
        ));
    }
    if sample.is_empty() {
        return Err(Error::EmptyData("Comparison requires sample values".into()));
    }

    let population_counts = count_categories(population);
    let sample_counts = count_categories(sample);

    let categories: BTreeSet<&String> = population_counts
        .keys()
        .chain(sample_counts.keys())
        .collect();

    let population_total = population.len() as f64;
    let sample_total = sample.len() as f64;

    let result = categories
        .into_iter()
        .map(|category| CategoryComparison {
            category: category.clone(),
            population_proportion: population_counts.get(category).copied().unwrap_or(0)
                as f64
                / population_total,
            sample_proportion: sample_counts.get(category).copied().unwrap_or(0) as f64
                / sample_total,
        })
        .collect();

    Ok(result)
}

fn count_categories(values: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
    counts
}
