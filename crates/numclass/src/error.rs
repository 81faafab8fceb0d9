use std::time::Duration;

/// Failures while answering a classification.
///
/// Fact provider failures never reach HTTP callers; the handler replaces them
/// with the fallback fun fact. Only `Classification` surfaces, as a 500.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Fact provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("Fact provider returned HTTP {0}")]
    Status(u16),

    #[error("Fact provider returned an empty body")]
    EmptyBody,

    #[error("Classification task failed: {0}")]
    Classification(String),
}
