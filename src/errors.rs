use thiserror::Error;

/// Errors emitted by the generation engine.
///
/// Only environment-level failures exist; the table generators themselves
/// cannot fail because they sample from non-empty, already-persisted tables.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parent table '{0}' has no rows")]
    EmptyParent(&'static str),
}
