use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the password and dashboard commands.
#[derive(Debug, Error)]
pub enum Error {
    /// The word pool is empty but words were requested.
    #[error("word pool is empty, cannot pick {0} word(s)")]
    EmptyPool(u32),

    /// The word list could not be obtained.
    #[error("word source unavailable: {0}")]
    WordSourceUnavailable(String),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
