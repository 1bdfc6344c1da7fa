use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The catalog store could not be reached, so no index could be built.
    #[error("Index unavailable: {0}")]
    IndexUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
