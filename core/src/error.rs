//! Error types for the PayWhirl client.
//!
//! # Design
//! Only failures that happen on this side of the wire are errors. A request
//! the service rejects (any 4xx/5xx) is still a successful call: its decoded
//! body is handed back to the caller, because the service's error envelope is
//! not something the client interprets. `Transport` and `Decode` stay separate
//! so callers can tell "never got an answer" from "got an answer we could not
//! read".

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the dispatcher, the transport and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied value was rejected before any network activity,
    /// e.g. an unsupported HTTP verb or an empty API key.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be assembled from the environment.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response: DNS, connect, TLS, timeout or
    /// a failure while reading the body.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service answered with a non-empty body that is not JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Wrap any transport-level failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Transport(err.into())
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        Error::transport(err)
    }
}
