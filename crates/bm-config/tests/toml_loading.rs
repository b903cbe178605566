//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use bm_config::{BoardmapConfig, OnUnresolved};
use bm_core::UnknownTenurePolicy;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
user_key = "toml-key"
base_url = "http://localhost:9000/v4"
timeout_secs = 7

[paging]
page_size = 250
max_pages = 40

[enrich]
max_attempts = 3
base_delay_ms = 100
max_delay_ms = 400
concurrency = 4

[resolve]
on_unresolved = "abort"

[aggregate]
unknown_tenure = "assume_former"

[output]
path = "boards.tsv"
delimiter = "\t"
abbreviate_rounds = true
"#,
        )?;

        let config: BoardmapConfig = Figment::from(Serialized::defaults(BoardmapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.user_key, "toml-key");
        assert_eq!(config.api.base_url(), "http://localhost:9000/v4");
        assert_eq!(config.api.timeout_secs, 7);
        assert_eq!(config.paging.page_size, 250);
        assert_eq!(config.paging.max_pages, 40);
        assert_eq!(config.enrich.max_attempts, 3);
        assert_eq!(config.enrich.concurrency, 4);
        assert_eq!(config.resolve.on_unresolved, OnUnresolved::Abort);
        assert_eq!(config.aggregate.unknown_tenure, UnknownTenurePolicy::AssumeFormer);
        assert_eq!(config.output.path, "boards.tsv");
        assert_eq!(config.output.delimiter_byte(), Some(b'\t'));
        assert!(config.output.abbreviate_rounds);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "boardmap.toml",
            r#"
[api]
user_key = "project-key"

[paging]
page_size = 10
"#,
        )?;

        let config = BoardmapConfig::load().expect("config loads");
        assert_eq!(config.api.user_key, "project-key");
        assert_eq!(config.paging.page_size, 10);
        assert_eq!(config.paging.max_pages, 1000);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[enrich]
concurrency = 8
"#,
        )?;

        let config: BoardmapConfig = Figment::from(Serialized::defaults(BoardmapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.enrich.concurrency, 8);
        assert_eq!(config.enrich.max_attempts, 5);
        assert_eq!(config.enrich.base_delay_ms, 5_000);
        assert_eq!(config.output.delimiter, ",");
        Ok(())
    });
}
