//! Folding records into per-company summary strings.
//!
//! Affiliations are split into four [`Bucket`]s (tenure × role) and each
//! bucket renders as `Name (PrimaryOrg); Name2 (PrimaryOrg2)`. Investments
//! render twice: a flat investor list and a per-round grouping in canonical
//! [`FundingRound`] order.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::Serialize;

use crate::entities::{AffiliationRecord, InvestmentRecord, PersonProfile};
use crate::enums::{FundingRound, JobRole, RoundLabelStyle, Tenure, UnknownTenurePolicy};

const ENTRY_SEPARATOR: &str = "; ";
const ROUND_SEPARATOR: &str = " | ";

// ---------------------------------------------------------------------------
// Affiliations
// ---------------------------------------------------------------------------

/// One of the four affiliation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    CurrentBoard,
    FormerBoard,
    CurrentOther,
    FormerOther,
}

impl Bucket {
    pub const ALL: [Self; 4] = [
        Self::CurrentBoard,
        Self::FormerBoard,
        Self::CurrentOther,
        Self::FormerOther,
    ];

    /// Place a record in exactly one bucket.
    #[must_use]
    pub fn classify(record: &AffiliationRecord, policy: UnknownTenurePolicy) -> Self {
        match (record.tenure(policy), record.role()) {
            (Tenure::Current, JobRole::BoardMember) => Self::CurrentBoard,
            (Tenure::Former, JobRole::BoardMember) => Self::FormerBoard,
            (Tenure::Current, JobRole::Other) => Self::CurrentOther,
            (Tenure::Former, JobRole::Other) => Self::FormerOther,
        }
    }
}

/// Rendered affiliation strings for one company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub current_board: String,
    pub former_board: String,
    pub current_other: String,
    pub former_other: String,
}

impl BoardSummary {
    fn slot(&mut self, bucket: Bucket) -> &mut String {
        match bucket {
            Bucket::CurrentBoard => &mut self.current_board,
            Bucket::FormerBoard => &mut self.former_board,
            Bucket::CurrentOther => &mut self.current_other,
            Bucket::FormerOther => &mut self.former_other,
        }
    }
}

/// Group records by bucket, preserving input order within each bucket.
#[must_use]
pub fn bucket_affiliations(
    records: &[AffiliationRecord],
    policy: UnknownTenurePolicy,
) -> BTreeMap<Bucket, Vec<&AffiliationRecord>> {
    let mut buckets: BTreeMap<Bucket, Vec<&AffiliationRecord>> =
        Bucket::ALL.iter().map(|bucket| (*bucket, Vec::new())).collect();
    for record in records {
        buckets
            .entry(Bucket::classify(record, policy))
            .or_default()
            .push(record);
    }
    buckets
}

/// Render one bucket's people as `Name (Org); Name2`.
///
/// Each person appears once. Entries sort by name, then organization; the
/// parenthetical is dropped when the primary organization is unknown.
/// Commas are stripped so the cell reads as a single `;`-separated list.
#[must_use]
pub fn render_people(
    records: &[&AffiliationRecord],
    profiles: &HashMap<String, PersonProfile>,
) -> String {
    let mut people: BTreeMap<&str, (&str, Option<&str>)> = BTreeMap::new();
    for record in records {
        let organization = profiles
            .get(&record.person_uuid)
            .and_then(|profile| profile.organization.as_deref());
        people.insert(
            record.person_uuid.as_str(),
            (record.person_name.as_str(), organization),
        );
    }

    let mut entries: Vec<(&str, Option<&str>)> = people.into_values().collect();
    entries.sort_unstable();

    entries
        .into_iter()
        .map(|(name, organization)| match organization {
            Some(org) => format!("{name} ({org})"),
            None => name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
        .replace(',', "")
}

/// Build the four affiliation strings for every company that has records.
///
/// Companies without records are absent from the map; the table assembler
/// renders them as empty strings.
#[must_use]
pub fn board_summaries(
    records: &[AffiliationRecord],
    profiles: &HashMap<String, PersonProfile>,
    policy: UnknownTenurePolicy,
) -> HashMap<String, BoardSummary> {
    let mut by_company: HashMap<&str, HashMap<Bucket, Vec<&AffiliationRecord>>> = HashMap::new();
    for record in records {
        by_company
            .entry(record.company_uuid.as_str())
            .or_default()
            .entry(Bucket::classify(record, policy))
            .or_default()
            .push(record);
    }

    by_company
        .into_iter()
        .map(|(company, buckets)| {
            let mut summary = BoardSummary::default();
            for (bucket, members) in buckets {
                *summary.slot(bucket) = render_people(&members, profiles);
            }
            (company.to_string(), summary)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Investments
// ---------------------------------------------------------------------------

/// Rendered investor strings for one company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvestorSummary {
    pub all: String,
    pub by_round: String,
}

/// Drop records equal on every field, keeping the first occurrence.
#[must_use]
pub fn dedupe_investments(records: Vec<InvestmentRecord>) -> Vec<InvestmentRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}

/// Sorted unique investor names joined with `"; "`.
#[must_use]
pub fn render_investors(records: &[&InvestmentRecord]) -> String {
    records
        .iter()
        .map(|record| record.investor_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// Investors grouped by round: `Seed Round (A; B) | Series A (C)`.
#[must_use]
pub fn render_rounds(records: &[&InvestmentRecord], style: RoundLabelStyle) -> String {
    let mut rounds: BTreeMap<FundingRound, BTreeSet<&str>> = BTreeMap::new();
    for record in records {
        rounds
            .entry(record.round)
            .or_default()
            .insert(record.investor_name.as_str());
    }

    rounds
        .into_iter()
        .map(|(round, investors)| {
            let names = investors.into_iter().collect::<Vec<_>>().join(ENTRY_SEPARATOR);
            format!("{} ({names})", round.display(style))
        })
        .collect::<Vec<_>>()
        .join(ROUND_SEPARATOR)
}

/// Build both investor strings for every company that has investments.
#[must_use]
pub fn investor_summaries(
    records: &[InvestmentRecord],
    style: RoundLabelStyle,
) -> HashMap<String, InvestorSummary> {
    let mut by_company: HashMap<&str, Vec<&InvestmentRecord>> = HashMap::new();
    for record in records {
        by_company
            .entry(record.company_uuid.as_str())
            .or_default()
            .push(record);
    }

    by_company
        .into_iter()
        .map(|(company, investments)| {
            let summary = InvestorSummary {
                all: render_investors(&investments),
                by_round: render_rounds(&investments, style),
            };
            (company.to_string(), summary)
        })
        .collect()
}
