use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourseError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("table size must be greater than zero")]
    InvalidTableSize,

    #[error("malformed course id: {0:?}")]
    MalformedKey(String),
}

pub type Result<T> = std::result::Result<T, CourseError>;
