use crate::metric::Metric;

/// ParseError
///
/// Raised while turning profiling output into [`Timings`](crate::metric::Timings).
/// Every variant is fatal for the benchmark run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A duration literal without a `us`, `ms` or `s` suffix, or with a
    /// value that is not a non-negative integer.
    #[error("unexpected time format: {0:?}")]
    UnexpectedFormat(String),

    /// An expected metric did not match a single line of output.
    #[error("no results found for metric {0}")]
    NoResults(Metric),
}
