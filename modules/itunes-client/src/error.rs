use thiserror::Error;

pub type Result<T> = std::result::Result<T, ItunesError>;

#[derive(Debug, Error)]
pub enum ItunesError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ItunesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ItunesError::Parse(err.to_string())
        } else {
            ItunesError::Network(err.to_string())
        }
    }
}
