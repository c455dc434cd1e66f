use thiserror::Error;

#[derive(Debug, Error)]
pub enum PodscoutError {
    #[error("Query term is empty")]
    EmptyQuery,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
