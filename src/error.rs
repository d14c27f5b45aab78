use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Why a lookup did not produce a result.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("location query is empty")]
    InvalidQuery,

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("weather service returned {0}")]
    Http(StatusCode),

    #[error("could not decode weather response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl LookupError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidQuery => FailureKind::InvalidQuery,
            Self::Network(_) => FailureKind::Network,
            Self::Http(status) => FailureKind::Http(status.as_u16()),
            Self::Decode(_) => FailureKind::Decode,
        }
    }
}

/// The category of a failed lookup, kept by the orchestrator after the
/// error itself has been reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    InvalidQuery,
    Network,
    Http(u16),
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuery => f.write_str("enter a location to search"),
            Self::Network => f.write_str("network error"),
            Self::Http(status) => write!(f, "HTTP {status}"),
            Self::Decode => f.write_str("unexpected response"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("no weather result to convert yet")]
    NoResultYet,
}
