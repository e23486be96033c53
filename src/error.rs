use thiserror::Error;

/// Failures produced by dataset validation.
///
/// There are only two categories: the input is shaped wrong (`Type`) or the
/// input is an array with nothing in it (`Empty`). The `Type` message says
/// which shape rule was broken, but callers are expected to match on the
/// variant rather than the text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("invalid dataset: {0}")]
    Type(String),

    #[error("dataset contains no elements")]
    Empty,
}
