//! jstat library - Descriptive statistics over JSON number arrays
//!
//! Feed any [`serde_json::Value`] to the operations in this crate and get
//! back a statistic, or a [`StatsError`] explaining why the input is not a
//! dataset. Every operation validates its input independently and never
//! mutates it, so each one is safe to call on untrusted data in isolation.
//!
//! ```
//! use serde_json::json;
//!
//! let summary = jstat::summary(&json!([1, 2, 3, 4, 5])).unwrap();
//! assert_eq!(summary.median, 3.0);
//! assert_eq!(summary.range, 4.0);
//! ```

pub mod dataset;
pub mod describe;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use dataset::validate;
pub use describe::{average, maximum, median, minimum, mode, range, standard_deviation, summary};
pub use error::StatsError;
pub use types::StatisticalSummary;
