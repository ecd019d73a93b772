use portfolio_media_common::Error as CommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("{0} catalog record(s) point at missing files")]
    BrokenReferences(usize),
}

pub type Result<T> = std::result::Result<T, MediaError>;
