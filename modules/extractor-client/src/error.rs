use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractorError>;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Worker error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Worker returned {got} results for a batch of {expected} urls")]
    Shape { expected: usize, got: usize },
}

impl From<reqwest::Error> for ExtractorError {
    fn from(err: reqwest::Error) -> Self {
        ExtractorError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(err: serde_json::Error) -> Self {
        ExtractorError::Parse(err.to_string())
    }
}
