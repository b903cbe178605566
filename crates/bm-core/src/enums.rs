//! Classification enums: job role, tenure, funding rounds.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

const INVESTMENT_MARKER: &str = " investment in ";

// ---------------------------------------------------------------------------
// JobRole
// ---------------------------------------------------------------------------

/// Board-related role of an affiliation.
///
/// Only `board_member` is singled out; advisors, observers and any other
/// non-employee job type fall into [`JobRole::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobRole {
    BoardMember,
    Other,
}

impl JobRole {
    /// Job type value the API uses for board members.
    pub const BOARD_MEMBER_JOB_TYPE: &'static str = "board_member";

    #[must_use]
    pub fn from_job_type(job_type: &str) -> Self {
        if job_type == Self::BOARD_MEMBER_JOB_TYPE {
            Self::BoardMember
        } else {
            Self::Other
        }
    }
}

// ---------------------------------------------------------------------------
// Tenure
// ---------------------------------------------------------------------------

/// Whether an affiliation is still held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tenure {
    Current,
    Former,
}

/// Rule applied when the API reports no `is_current` value for a job.
///
/// Upstream records frequently omit the flag. The historical behaviour of
/// this report is [`UnknownTenurePolicy::AssumeCurrent`]: an affiliation
/// is former only when the API says so explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTenurePolicy {
    #[default]
    AssumeCurrent,
    AssumeFormer,
}

impl UnknownTenurePolicy {
    /// Resolve the ternary `is_current` flag into a [`Tenure`].
    #[must_use]
    pub const fn tenure(self, is_current: Option<bool>) -> Tenure {
        match (is_current, self) {
            (Some(true), _) | (None, Self::AssumeCurrent) => Tenure::Current,
            (Some(false), _) | (None, Self::AssumeFormer) => Tenure::Former,
        }
    }
}

// ---------------------------------------------------------------------------
// FundingRound
// ---------------------------------------------------------------------------

/// Financing round labels, declared in display order.
///
/// The derived `Ord` follows declaration order, so sorting rounds yields the
/// canonical sequence: grants and seed stages first, lettered series next,
/// then later-stage, debt and equity variants. Labels outside the known set
/// map to [`FundingRound::Unlabeled`], which always sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingRound {
    Grant,
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
    SeriesD,
    SeriesE,
    SeriesF,
    SeriesG,
    SeriesH,
    SeriesI,
    SeriesJ,
    SeriesK,
    SecondaryMarket,
    PrivateEquity,
    DebtFinancing,
    Angel,
    Funding,
    Venture,
    Corporate,
    NonEquityAssistance,
    ConvertibleNote,
    PostIpoEquity,
    Unlabeled,
}

/// How round labels are written in the grouped investor column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundLabelStyle {
    #[default]
    Full,
    Abbreviated,
}

impl FundingRound {
    pub const ALL: [Self; 25] = [
        Self::Grant,
        Self::PreSeed,
        Self::Seed,
        Self::SeriesA,
        Self::SeriesB,
        Self::SeriesC,
        Self::SeriesD,
        Self::SeriesE,
        Self::SeriesF,
        Self::SeriesG,
        Self::SeriesH,
        Self::SeriesI,
        Self::SeriesJ,
        Self::SeriesK,
        Self::SecondaryMarket,
        Self::PrivateEquity,
        Self::DebtFinancing,
        Self::Angel,
        Self::Funding,
        Self::Venture,
        Self::Corporate,
        Self::NonEquityAssistance,
        Self::ConvertibleNote,
        Self::PostIpoEquity,
        Self::Unlabeled,
    ];

    /// Label as it appears in investment titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grant => "Grant",
            Self::PreSeed => "Pre Seed Round",
            Self::Seed => "Seed Round",
            Self::SeriesA => "Series A",
            Self::SeriesB => "Series B",
            Self::SeriesC => "Series C",
            Self::SeriesD => "Series D",
            Self::SeriesE => "Series E",
            Self::SeriesF => "Series F",
            Self::SeriesG => "Series G",
            Self::SeriesH => "Series H",
            Self::SeriesI => "Series I",
            Self::SeriesJ => "Series J",
            Self::SeriesK => "Series K",
            Self::SecondaryMarket => "Secondary Market",
            Self::PrivateEquity => "Private Equity Round",
            Self::DebtFinancing => "Debt Financing",
            Self::Angel => "Angel Round",
            Self::Funding => "Funding Round",
            Self::Venture => "Venture Round",
            Self::Corporate => "Corporate Round",
            Self::NonEquityAssistance => "Non Equity Assistance",
            Self::ConvertibleNote => "Convertible Note",
            Self::PostIpoEquity => "Post-IPO Equity",
            Self::Unlabeled => "Other",
        }
    }

    /// Short label for compact reports.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Grant => "Grant",
            Self::PreSeed => "Pre Seed",
            Self::Seed => "Seed",
            Self::SeriesA => "A",
            Self::SeriesB => "B",
            Self::SeriesC => "C",
            Self::SeriesD => "D",
            Self::SeriesE => "E",
            Self::SeriesF => "F",
            Self::SeriesG => "G",
            Self::SeriesH => "H",
            Self::SeriesI => "I",
            Self::SeriesJ => "J",
            Self::SeriesK => "K",
            Self::SecondaryMarket => "Secondary",
            Self::PrivateEquity => "Private Eq",
            Self::DebtFinancing => "Debt",
            Self::Angel => "Angel Rnd",
            Self::Funding => "Funding Rnd",
            Self::Venture => "Venture Rnd",
            Self::Corporate => "Corporate Rnd",
            Self::NonEquityAssistance => "Non Equity Assist",
            Self::ConvertibleNote => "Convert Note",
            Self::PostIpoEquity => "Post-IPO Equity",
            Self::Unlabeled => "Other",
        }
    }

    #[must_use]
    pub const fn display(self, style: RoundLabelStyle) -> &'static str {
        match style {
            RoundLabelStyle::Full => self.label(),
            RoundLabelStyle::Abbreviated => self.abbreviation(),
        }
    }

    /// Extract the round from an investment title.
    ///
    /// Titles look like `"Acme Ventures investment in Series A - Widgets"`:
    /// the round follows `" investment in "` and runs to the next `" - "`.
    /// Investor and company names may themselves contain either separator,
    /// so every marker occurrence is tried until one yields a known round.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the title has no marker, the
    /// label after it is empty, or the label is not a known round.
    pub fn from_investment_title(title: &str) -> Result<Self, CoreError> {
        let mut last_label = None;
        for (at, marker) in title.match_indices(INVESTMENT_MARKER) {
            let rest = &title[at + marker.len()..];
            let label = rest.split_once(" - ").map_or(rest, |(label, _)| label).trim();
            if label.is_empty() {
                continue;
            }
            if let Ok(round) = label.parse() {
                return Ok(round);
            }
            last_label = Some(label);
        }
        Err(CoreError::Validation(match last_label {
            Some(label) => format!("unknown funding round label: {label}"),
            None => format!("no funding round in investment title: {title}"),
        }))
    }
}

impl FromStr for FundingRound {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::Unlabeled);
        }
        Self::ALL
            .into_iter()
            .filter(|round| *round != Self::Unlabeled)
            .find(|round| round.label() == trimmed)
            .ok_or_else(|| CoreError::Validation(format!("unknown funding round label: {trimmed}")))
    }
}

impl fmt::Display for FundingRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
