// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced to the application shell. Every fallible async task
/// delivers one of these back to the UI loop instead of dying silently on
/// the executor.
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    Http(String),
    /// The remote library answered with a non-success status or a body we
    /// could not decode.
    Api(String),
    /// The background portal rejected or failed the autostart request.
    Portal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "Network error: {}", e),
            Error::Api(e) => write!(f, "Steam Deck Repo error: {}", e),
            Error::Portal(e) => write!(f, "Background portal error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Api(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<ashpd::Error> for Error {
    fn from(err: ashpd::Error) -> Self {
        Error::Portal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
