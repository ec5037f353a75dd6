use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Unified error type for every client operation.
///
/// All entry points return this; the binary's top level is the only place
/// errors are formatted for the user.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("speaker '{0}' not found on server")]
    UnknownSpeaker(String),

    #[error("failed to load config from {path}: {message}")]
    Config { path: String, message: String },

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
