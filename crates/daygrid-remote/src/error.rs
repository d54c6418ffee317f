//! Error types for remote service operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status. The body is passed
    /// through verbatim; no interval computation happens on failed fetches.
    #[error("Service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Every source in the schedule plan was attempted once and failed.
    #[error("All schedule sources failed: {}", attempts.join("; "))]
    AllSourcesFailed { attempts: Vec<String> },

    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, RemoteError>;
