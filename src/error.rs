// src/error.rs
use thiserror::Error;

/// Startup problems that must block every outbound call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("NEIS_API_KEY is not set. Add it to the environment or a .env file.")]
    MissingApiKey,
}

/// Anything that went wrong at the query boundary.
///
/// An empty result is *not* a `QueryError`; lookups return an empty `Vec` for that.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered HTTP {status}")]
    Status { status: u16 },

    #[error("unexpected response: {0}")]
    Payload(String),

    #[error("NEIS rejected the request ({code}): {message}")]
    Api { code: String, message: String },
}

impl QueryError {
    pub fn payload(msg: impl Into<String>) -> Self {
        QueryError::Payload(msg.into())
    }
}
