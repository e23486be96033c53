//! Descriptive statistics operations
//!
//! Each operation validates its own input and works on a private copy of the
//! data, so any of them is safe to call in isolation and none of them can
//! observe a partially validated dataset.

use std::collections::HashMap;

use serde_json::Value;

use crate::dataset;
use crate::error::StatsError;
use crate::types::StatisticalSummary;

/// Compute the arithmetic mean of a dataset.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// assert_eq!(jstat::average(&json!([1, 2, 3, 4, 5])).unwrap(), 3.0);
/// ```
pub fn average(value: &Value) -> Result<f64, StatsError> {
    let numbers = dataset::extract(value)?;
    Ok(mean_of(&numbers))
}

/// Compute the largest value in a dataset.
pub fn maximum(value: &Value) -> Result<f64, StatsError> {
    let numbers = dataset::extract(value)?;
    Ok(max_of(&numbers))
}

/// Compute the smallest value in a dataset.
pub fn minimum(value: &Value) -> Result<f64, StatsError> {
    let numbers = dataset::extract(value)?;
    Ok(min_of(&numbers))
}

/// Compute the median of a dataset.
///
/// Sorts a private copy ascending, then returns the middle element, or the
/// mean of the two middle elements when the count is even.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// assert_eq!(jstat::median(&json!([3, 1, 2])).unwrap(), 2.0);
/// assert_eq!(jstat::median(&json!([4, 1, 3, 2])).unwrap(), 2.5);
/// ```
pub fn median(value: &Value) -> Result<f64, StatsError> {
    let sorted = sorted_copy(dataset::extract(value)?);
    let n = sorted.len();
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Compute the mode of a dataset: every value that occurs as often as the
/// most frequent value does.
///
/// The result is deduplicated and sorted ascending. It is never empty for a
/// valid dataset; a dataset where every value occurs once yields all of its
/// distinct values.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// assert_eq!(jstat::mode(&json!([1, 1, 2, 3])).unwrap(), vec![1.0]);
/// assert_eq!(jstat::mode(&json!([3, 1, 3, 1])).unwrap(), vec![1.0, 3.0]);
/// ```
pub fn mode(value: &Value) -> Result<Vec<f64>, StatsError> {
    let numbers = dataset::extract(value)?;
    let mut frequency: HashMap<u64, usize> = HashMap::new();
    for &x in &numbers {
        *frequency.entry(value_key(x)).or_insert(0) += 1;
    }
    let top = frequency
        .values()
        .copied()
        .max()
        .expect("dataset is non-empty");
    let mut modes: Vec<f64> = frequency
        .iter()
        .filter(|&(_, &count)| count == top)
        .map(|(&bits, _)| f64::from_bits(bits))
        .collect();
    modes.sort_unstable_by(f64::total_cmp);
    Ok(modes)
}

/// Compute the range of a dataset: maximum minus minimum, always >= 0.
pub fn range(value: &Value) -> Result<f64, StatsError> {
    let numbers = dataset::extract(value)?;
    Ok(max_of(&numbers) - min_of(&numbers))
}

/// Compute the population standard deviation of a dataset.
///
/// Uses the population formula: the square root of the mean squared
/// deviation from the mean, with denominator `n` (not `n - 1`).
pub fn standard_deviation(value: &Value) -> Result<f64, StatsError> {
    let numbers = dataset::extract(value)?;
    let mean = mean_of(&numbers);
    let squared_total: f64 = numbers.iter().map(|x| (x - mean).powi(2)).sum();
    Ok((squared_total / numbers.len() as f64).sqrt())
}

/// Compute every statistic for a dataset in one call.
///
/// Validates up front, then delegates to the individual operations, so a
/// caller never sees a partially populated summary. Each delegated call
/// revalidates; that redundancy is harmless for an input that already
/// passed.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// let summary = jstat::summary(&json!([1, 1, 2, 3])).unwrap();
/// assert_eq!(summary.average, 1.75);
/// assert_eq!(summary.median, 1.5);
/// assert_eq!(summary.mode, vec![1.0]);
/// ```
pub fn summary(value: &Value) -> Result<StatisticalSummary, StatsError> {
    dataset::validate(value)?;
    log::trace!(
        "summarizing dataset of {} elements",
        value.as_array().map_or(0, Vec::len)
    );
    Ok(StatisticalSummary {
        average: average(value)?,
        maximum: maximum(value)?,
        median: median(value)?,
        minimum: minimum(value)?,
        mode: mode(value)?,
        range: range(value)?,
        standard_deviation: standard_deviation(value)?,
    })
}

fn mean_of(numbers: &[f64]) -> f64 {
    numbers.iter().sum::<f64>() / numbers.len() as f64
}

fn max_of(numbers: &[f64]) -> f64 {
    numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn min_of(numbers: &[f64]) -> f64 {
    numbers.iter().copied().fold(f64::INFINITY, f64::min)
}

fn sorted_copy(mut numbers: Vec<f64>) -> Vec<f64> {
    // total_cmp is a total order; NaN never gets past validation
    numbers.sort_unstable_by(f64::total_cmp);
    numbers
}

/// Map a value to a hashable key under IEEE-754 double equality.
///
/// Folds -0.0 into 0.0 so the two zeros count as the same value; every
/// other finite value has a unique bit pattern.
fn value_key(x: f64) -> u64 {
    if x == 0.0 { 0.0_f64.to_bits() } else { x.to_bits() }
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod describe_tests;
