use crate::model::BookmarkKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheatError {
    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Example not found: {0}")]
    ExampleNotFound(BookmarkKey),

    #[error("Invalid bookmark: {0}")]
    InvalidBookmark(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CheatError>;
