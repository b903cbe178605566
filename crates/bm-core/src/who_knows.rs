//! "Who knows" report: the people sharing a board with a given person.

use std::collections::{BTreeMap, BTreeSet};

use crate::entities::AffiliationRecord;
use crate::errors::CoreError;

/// How the report groups its entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grouping {
    /// `Name1 (CompanyA, CompanyB), Name2 (CompanyA)`
    #[default]
    PersonFirst,
    /// `CompanyA (Name1, Name2), CompanyB (Name1)`
    CompanyFirst,
}

/// List everyone affiliated with the companies `name` is affiliated with.
///
/// The named person is excluded from the output. Groups and their members
/// are sorted and de-duplicated. An empty string means the person shares no
/// company with anyone else in `records`.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] when no record carries `name`.
pub fn who_knows(
    name: &str,
    records: &[AffiliationRecord],
    grouping: Grouping,
) -> Result<String, CoreError> {
    let companies: BTreeSet<&str> = records
        .iter()
        .filter(|record| record.person_name == name)
        .map(|record| record.company_uuid.as_str())
        .collect();

    if companies.is_empty() {
        return Err(CoreError::NotFound {
            entity_type: "person".to_string(),
            id: name.to_string(),
        });
    }

    let mut groups: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for record in records {
        if record.person_name == name || !companies.contains(record.company_uuid.as_str()) {
            continue;
        }
        let (key, member) = match grouping {
            Grouping::PersonFirst => (record.person_name.as_str(), record.company_name.as_str()),
            Grouping::CompanyFirst => (record.company_name.as_str(), record.person_name.as_str()),
        };
        groups.entry(key).or_default().insert(member);
    }

    Ok(groups
        .into_iter()
        .map(|(key, members)| {
            let members = members.into_iter().collect::<Vec<_>>().join(", ");
            format!("{key} ({members})")
        })
        .collect::<Vec<_>>()
        .join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(company: &str, person: &str) -> AffiliationRecord {
        AffiliationRecord {
            company_uuid: format!("c-{company}"),
            company_name: company.into(),
            person_uuid: format!("p-{person}"),
            person_name: person.into(),
            title: None,
            job_type: "board_member".into(),
            is_current: Some(true),
        }
    }

    fn sample() -> Vec<AffiliationRecord> {
        vec![
            record("Acme", "Byron"),
            record("Acme", "Alice"),
            record("Acme", "Bob"),
            record("Zeta", "Byron"),
            record("Zeta", "Alice"),
            record("Zeta", "Alice"),
            record("Other", "Carol"),
        ]
    }

    #[test]
    fn person_first_groups_companies_per_person() {
        let report = who_knows("Byron", &sample(), Grouping::PersonFirst).unwrap();
        assert_eq!(report, "Alice (Acme, Zeta), Bob (Acme)");
    }

    #[test]
    fn company_first_groups_people_per_company() {
        let report = who_knows("Byron", &sample(), Grouping::CompanyFirst).unwrap();
        assert_eq!(report, "Acme (Alice, Bob), Zeta (Alice)");
    }

    #[test]
    fn lone_member_yields_empty_report() {
        let report = who_knows("Carol", &sample(), Grouping::PersonFirst).unwrap();
        assert_eq!(report, "");
    }

    #[test]
    fn unknown_person_is_not_found() {
        let err = who_knows("Nobody", &sample(), Grouping::PersonFirst).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }
}
