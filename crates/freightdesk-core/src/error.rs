//! Error types for Freightdesk

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Record source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, Error>;
