use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslitError {
    #[error("phoneme sequence is empty")]
    EmptySequence,

    #[error("unknown phoneme symbol `{symbol}` at position {position}")]
    UnknownSymbol { symbol: String, position: usize },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Failed to serialize record to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TranslitError>;
