use thiserror::Error;

#[derive(Error, Debug)]
pub enum OctaviaError {
    #[error("Invalid digits: {0}")]
    InvalidDigits(String),
    #[error("Value of a {len}-digit sequence does not fit in 128 bits")]
    ValueOverflow { len: usize },
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),
    #[error("No input given: expected `decimal` or `digits`")]
    MissingInput,
    #[error("Ambiguous input: give either `decimal` or `digits`, not both")]
    AmbiguousInput,
    #[error("Config error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, OctaviaError>;
