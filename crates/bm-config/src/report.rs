//! Settings that shape the report: unresolved names, tenure rule, output file.

use bm_core::{RoundLabelStyle, UnknownTenurePolicy};
use serde::{Deserialize, Serialize};

/// What to do with an input name the lookup cannot resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnUnresolved {
    /// Log a warning and continue without the company.
    #[default]
    Skip,
    /// Stop the run.
    Abort,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolveConfig {
    #[serde(default)]
    pub on_unresolved: OnUnresolved,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AggregateConfig {
    /// Rule for affiliations whose `is_current` flag is missing.
    #[serde(default)]
    pub unknown_tenure: UnknownTenurePolicy,
}

fn default_path() -> String {
    String::from("output.csv")
}

fn default_delimiter() -> String {
    String::from(",")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Destination of the summary table.
    #[serde(default = "default_path")]
    pub path: String,

    /// Single-byte field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Write `Seed (..) | A (..)` instead of full round labels.
    #[serde(default)]
    pub abbreviate_rounds: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            delimiter: default_delimiter(),
            abbreviate_rounds: false,
        }
    }
}

impl OutputConfig {
    /// Delimiter as the byte the CSV writer expects, if it is a single byte.
    #[must_use]
    pub fn delimiter_byte(&self) -> Option<u8> {
        match self.delimiter.as_bytes() {
            [byte] => Some(*byte),
            _ => None,
        }
    }

    #[must_use]
    pub const fn round_style(&self) -> RoundLabelStyle {
        if self.abbreviate_rounds {
            RoundLabelStyle::Abbreviated
        } else {
            RoundLabelStyle::Full
        }
    }
}
