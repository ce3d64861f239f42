use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Static directory {0} does not exist; build the front-end first")]
    MissingStaticDir(PathBuf),
}

pub type Result<T> = std::result::Result<T, WebError>;
