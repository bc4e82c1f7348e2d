use thiserror::Error;

/// Core error type shared across datamorph crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Matcher options are inconsistent.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// Convenience alias for results returned by datamorph crates.
pub type Result<T> = std::result::Result<T, Error>;
