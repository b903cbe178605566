//! API client error types.

use std::time::Duration;

use thiserror::Error;

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested entity does not exist upstream.
    NotFound,
    /// Transient; the same request may succeed later.
    Retryable,
    /// Protocol or logic failure; retrying will not help.
    Fatal,
}

/// Errors that can occur when talking to the company-intelligence API.
#[derive(Debug, Error)]
pub enum CrunchbaseError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status without a structured error body.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// API answered with a structured error instead of data.
    #[error("From Crunchbase -- CODE {code}: {message}")]
    Upstream {
        /// Upstream error code, verbatim.
        code: String,
        /// Upstream error message, verbatim.
        message: String,
    },

    /// Nothing matched the lookup.
    #[error("not found: {what}")]
    NotFound {
        /// Description of what was looked up.
        what: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A search page added no new records before the total was reached.
    #[error(
        "{collection} search stopped making progress after {pages} page(s): {retrieved} of {expected} records"
    )]
    NoProgress {
        collection: String,
        pages: u32,
        retrieved: usize,
        expected: u64,
    },

    /// A search needed more pages than allowed.
    #[error("{collection} search exceeded {pages} page(s) with {retrieved} of {expected} records")]
    PageLimit {
        collection: String,
        pages: u32,
        retrieved: usize,
        expected: u64,
    },

    /// A retryable request kept failing.
    #[error("giving up on {id} after {attempts} attempt(s): {last}")]
    RetriesExhausted {
        /// Identifier of the entity being fetched.
        id: String,
        attempts: u32,
        /// Rendering of the final error.
        last: String,
    },
}

impl CrunchbaseError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::RateLimited { .. } | Self::Decode(_) => ErrorKind::Retryable,
            Self::Http(e) if e.is_timeout() => ErrorKind::Retryable,
            Self::Http(_)
            | Self::Api { .. }
            | Self::Upstream { .. }
            | Self::NoProgress { .. }
            | Self::PageLimit { .. }
            | Self::RetriesExhausted { .. } => ErrorKind::Fatal,
        }
    }

    /// Minimum wait the server asked for, if any.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after_secs } => Some(Duration::from_secs(*retry_after_secs)),
            _ => None,
        }
    }
}
