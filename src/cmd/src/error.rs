use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("bad request: {0:?}")]
    BadRequest(String),
    #[error("config: {0:?}")]
    Config(#[from] config::ConfigError),
    #[error("metadata: {0:?}")]
    Metadata(#[from] metadata::error::MetadataError),
    #[error("platform: {0:?}")]
    Platform(#[from] platform::PlatformError),
    #[error("stdio: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("tracing: {0:?}")]
    SetGlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("other: {0:?}")]
    Other(#[from] anyhow::Error),
}
