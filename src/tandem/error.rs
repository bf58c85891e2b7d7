use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TandemError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is not valid UTF-8 text: {}", path.display())]
    Decode { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Row index {index} out of range (document has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Document is empty")]
    EmptyDocument,

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TandemError>;
