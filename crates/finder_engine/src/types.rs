use std::io;
use std::time::Duration;

use thiserror::Error;

/// Failure of the primary search request.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search url: {0}")]
    InvalidUrl(String),
    #[error("search timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return SearchError::Timeout;
        }
        if let Some(status) = err.status() {
            return SearchError::HttpStatus(status.as_u16());
        }
        SearchError::Transport(err.to_string())
    }
}

/// Failure to obtain a JSON reply from the external executor.
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("could not start executor {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("executor did not answer within {0:?}")]
    Timeout(Duration),
    #[error("executor produced no output")]
    EmptyOutput,
    #[error("executor output is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure to read a saved review.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("review file {path} is unreadable: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}
