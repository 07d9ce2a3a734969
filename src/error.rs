use thiserror::Error;

/// Failures that stop a run from producing records. The pipeline logs these and
/// falls back to an empty result.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid source url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network errors, timeouts and non-success statuses.
    #[error("fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not read saved page: {0}")]
    Io(#[from] std::io::Error),
}
