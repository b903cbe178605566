use serde::{Deserialize, Serialize};

use crate::enums::{FundingRound, JobRole, Tenure, UnknownTenurePolicy};

/// Marker written wherever a profile field has no value upstream.
pub const UNKNOWN: &str = "unknown";

/// A company resolved through the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    pub uuid: String,
    pub name: String,
}

/// One board-type relationship between a person and a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliationRecord {
    pub company_uuid: String,
    pub company_name: String,
    pub person_uuid: String,
    pub person_name: String,
    pub title: Option<String>,
    pub job_type: String,
    /// Ternary flag as reported upstream; `None` when the API omits it.
    pub is_current: Option<bool>,
}

impl AffiliationRecord {
    #[must_use]
    pub fn role(&self) -> JobRole {
        JobRole::from_job_type(&self.job_type)
    }

    #[must_use]
    pub const fn tenure(&self, policy: UnknownTenurePolicy) -> Tenure {
        policy.tenure(self.is_current)
    }
}

/// Primary position and social link of a person.
///
/// `None` means the API had no value for the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub uuid: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub organization_uuid: Option<String>,
    pub linkedin: Option<String>,
}

impl PersonProfile {
    /// Profile with every field unknown.
    #[must_use]
    pub fn unknown(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            ..Self::default()
        }
    }

    /// True when title, organization (name and id) and profile link are all known.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.title.is_some()
            && self.organization.is_some()
            && self.organization_uuid.is_some()
            && self.linkedin.is_some()
    }

    #[must_use]
    pub fn title_or_unknown(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN)
    }

    #[must_use]
    pub fn organization_or_unknown(&self) -> &str {
        self.organization.as_deref().unwrap_or(UNKNOWN)
    }

    #[must_use]
    pub fn linkedin_or_unknown(&self) -> &str {
        self.linkedin.as_deref().unwrap_or(UNKNOWN)
    }
}

/// One investor participating in one round of a company.
///
/// Equality covers every field, which is what de-duplication relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvestmentRecord {
    pub company_uuid: String,
    pub company_name: String,
    pub investor_uuid: String,
    pub investor_name: String,
    pub round: FundingRound,
    pub partner_uuid: Option<String>,
    pub partner_name: Option<String>,
}

/// Final output unit: one row per resolved company.
///
/// Field renames double as the delimited file's header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummaryRow {
    #[serde(rename = "Company UUID")]
    pub company_uuid: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Current Board Members")]
    pub current_board_members: String,
    #[serde(rename = "Former Board Members")]
    pub former_board_members: String,
    #[serde(rename = "Current Board Advisors/Observers")]
    pub current_other_affiliates: String,
    #[serde(rename = "Former Board Advisors/Observers")]
    pub former_other_affiliates: String,
    #[serde(rename = "Investors (All)")]
    pub investors_all: String,
    #[serde(rename = "Investors (w/ Info)")]
    pub investors_by_round: String,
}

impl CompanySummaryRow {
    pub const COLUMNS: [&'static str; 8] = [
        "Company UUID",
        "Company",
        "Current Board Members",
        "Former Board Members",
        "Current Board Advisors/Observers",
        "Former Board Advisors/Observers",
        "Investors (All)",
        "Investors (w/ Info)",
    ];

    /// Column label and value pairs, in header order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            (Self::COLUMNS[0], self.company_uuid.as_str()),
            (Self::COLUMNS[1], self.company.as_str()),
            (Self::COLUMNS[2], self.current_board_members.as_str()),
            (Self::COLUMNS[3], self.former_board_members.as_str()),
            (Self::COLUMNS[4], self.current_other_affiliates.as_str()),
            (Self::COLUMNS[5], self.former_other_affiliates.as_str()),
            (Self::COLUMNS[6], self.investors_all.as_str()),
            (Self::COLUMNS[7], self.investors_by_round.as_str()),
        ]
    }
}
