use thiserror::Error;

/// Failures while persisting episode traces.
#[derive(Debug, Error)]
pub enum GymError {
    #[error("trace io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("trace encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
