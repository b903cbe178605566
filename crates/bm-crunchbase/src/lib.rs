//! # bm-crunchbase
//!
//! HTTP client for the Crunchbase v4 API as used by boardmap.
//!
//! - [`query`] builds the structured search bodies
//! - [`paginate`] walks `after_id` cursors until a search is exhausted
//! - [`autocomplete`] resolves free-text company names
//! - [`people`] enriches person identifiers with their primary position
//! - [`affiliations`] and [`investments`] map search hits to core records

pub mod affiliations;
pub mod autocomplete;
pub mod investments;
pub mod paginate;
pub mod people;
pub mod query;
pub mod search;
pub mod wire;

mod error;
mod http;

pub use autocomplete::{Match, Resolution};
pub use error::{CrunchbaseError, ErrorKind};
pub use people::{Enrichment, RetryPolicy};
pub use query::SearchQuery;

use std::fmt;
use std::time::Duration;

// ── Types ──────────────────────────────────────────────────────────

/// Entity collections the client searches or looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Organizations,
    People,
    Jobs,
    Investments,
}

impl Collection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organizations => "organizations",
            Self::People => "people",
            Self::Jobs => "jobs",
            Self::Investments => "investments",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page size and page-count bound for searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page_size: u32,
    pub max_pages: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page_size: bm_core::MAX_PAGE_SIZE,
            max_pages: 1000,
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Authenticated client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct CrunchbaseClient {
    http: reqwest::Client,
    base_url: String,
    user_key: String,
}

impl CrunchbaseClient {
    /// Build a client. `base_url` is used as given minus any trailing `/`.
    ///
    /// # Errors
    ///
    /// Returns [`CrunchbaseError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        base_url: &str,
        user_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CrunchbaseError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("boardmap/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_key: user_key.into(),
        })
    }

    /// Absolute URL for an API path such as `/searches/jobs`, carrying the
    /// user key and any extra query parameters.
    fn url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}{path}?user_key={}",
            self.base_url,
            urlencoding::encode(&self.user_key)
        );
        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    fn get(&self, path: &str, params: &[(&str, &str)]) -> reqwest::RequestBuilder {
        self.http.get(self.url(path, params))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path, &[]))
    }
}
