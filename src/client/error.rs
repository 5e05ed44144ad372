use thiserror::Error;

/// Every variant ends up in the same notification; only the message differs.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Non-2xx response, carrying the message extracted from it.
    #[error("{0}")]
    Status(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
