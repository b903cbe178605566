//! Search pagination limits.

use bm_core::MAX_PAGE_SIZE;
use serde::{Deserialize, Serialize};

const fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

const fn default_max_pages() -> u32 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PagingConfig {
    /// Records requested per search page (1..=1000).
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Hard cap on pages fetched for a single search.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}
