use thiserror::Error;

/// Errors emitted by the masking engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("column '{0}' not found in header")]
    ColumnNotFound(String),
    #[error("input '{0}' has no header row")]
    MissingHeader(String),
    #[error("cannot open input '{path}': {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Core(#[from] datamorph_core::Error),
}
