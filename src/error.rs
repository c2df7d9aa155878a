use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Invalid Alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Invalid Target: {0}")]
    InvalidTarget(String),

    #[error("Invalid Configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid Symbol: '{0}' is not part of the alphabet")]
    InvalidSymbol(char),

    #[error("Index Out Of Range: gene decodes to {index}, alphabet has {len} symbols")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Length Mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SfResult<T> = Result<T, ForgeError>;
