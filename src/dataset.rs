//! Dataset validation
//!
//! Boundary checks that turn an untrusted JSON value into a usable dataset:
//! a non-empty array in which every element is a finite number.

use serde_json::Value;

use crate::error::StatsError;

/// Check that a JSON value is a valid dataset.
///
/// A valid dataset is a JSON array with at least one element, where every
/// element is a finite number. Anything else fails:
/// - a non-array value fails with [`StatsError::Type`]
/// - an empty array fails with [`StatsError::Empty`]
/// - an array holding a string, boolean, null, nested array or object
///   fails with [`StatsError::Type`]
///
/// # Examples
/// ```
/// use jstat::dataset::validate;
/// use serde_json::json;
///
/// assert!(validate(&json!([1, 2.5, -3])).is_ok());
/// assert!(validate(&json!("not an array")).is_err());
/// assert!(validate(&json!([])).is_err());
/// ```
pub fn validate(value: &Value) -> Result<(), StatsError> {
    let elements = require_array(value)?;
    for (index, element) in elements.iter().enumerate() {
        require_finite_number(index, element)?;
    }
    Ok(())
}

/// Validate `value` and copy its elements out as `f64`.
///
/// Performs the same checks as [`validate`] in a single pass, so callers
/// never see a partially converted dataset.
pub(crate) fn extract(value: &Value) -> Result<Vec<f64>, StatsError> {
    let elements = require_array(value)?;
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| require_finite_number(index, element))
        .collect()
}

fn require_array(value: &Value) -> Result<&[Value], StatsError> {
    let Value::Array(elements) = value else {
        log::debug!("dataset rejected: input is {}", kind_name(value));
        return Err(StatsError::Type(format!(
            "expected an array of numbers, got {}",
            kind_name(value)
        )));
    };
    if elements.is_empty() {
        log::debug!("dataset rejected: array is empty");
        return Err(StatsError::Empty);
    }
    Ok(elements)
}

fn require_finite_number(index: usize, element: &Value) -> Result<f64, StatsError> {
    if let Some(x) = element.as_f64() {
        if x.is_finite() {
            return Ok(x);
        }
    }
    Err(StatsError::Type(format!(
        "element at index {index} is not a finite number, got {}",
        kind_name(element)
    )))
}

/// Human-readable name for a JSON value's type, used in error messages
fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod dataset_tests;
