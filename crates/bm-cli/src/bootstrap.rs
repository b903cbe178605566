use std::time::Duration;

use anyhow::Context;
use bm_config::BoardmapConfig;
use bm_crunchbase::{CrunchbaseClient, Paging, RetryPolicy};

/// Load `.env`, the config files and the environment, then validate.
pub fn load_config() -> anyhow::Result<BoardmapConfig> {
    let config = BoardmapConfig::load_with_dotenv().context("failed to load configuration")?;
    config
        .validate()
        .context("invalid configuration (set BOARDMAP_API__USER_KEY or api.user_key in boardmap.toml)")?;
    Ok(config)
}

pub fn client(config: &BoardmapConfig) -> anyhow::Result<CrunchbaseClient> {
    CrunchbaseClient::new(
        config.api.base_url(),
        config.api.user_key.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("failed to build API client")
}

pub const fn paging(config: &BoardmapConfig) -> Paging {
    Paging {
        page_size: config.paging.page_size,
        max_pages: config.paging.max_pages,
    }
}

pub const fn retry_policy(config: &BoardmapConfig) -> RetryPolicy {
    RetryPolicy {
        max_attempts: config.enrich.max_attempts,
        base_delay: config.enrich.base_delay(),
        max_delay: config.enrich.max_delay(),
    }
}
