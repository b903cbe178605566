//! Board-affiliation search and mapping of job hits to [`AffiliationRecord`]s.

use std::collections::{HashMap, HashSet};

use bm_core::{AffiliationRecord, Company};

use crate::query::SearchQuery;
use crate::wire::{Entity, JobProperties};
use crate::{Collection, CrunchbaseClient, CrunchbaseError, Paging};

impl CrunchbaseClient {
    /// Every current and former board-type job at `companies`.
    ///
    /// # Errors
    ///
    /// Propagates search and pagination errors.
    pub async fn board_affiliations(
        &self,
        companies: &[Company],
        paging: Paging,
    ) -> Result<Vec<AffiliationRecord>, CrunchbaseError> {
        if companies.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<String> = companies.iter().map(|c| c.uuid.clone()).collect();
        let query = SearchQuery::board_affiliations(&ids, paging.page_size);
        let hits: Vec<Entity<JobProperties>> =
            self.search_all(Collection::Jobs, &query, paging).await?;
        Ok(to_affiliations(hits, companies))
    }
}

/// Map job hits to records, keeping only those at a resolved company.
///
/// Hits without a person or organization are dropped. The company name is
/// the resolved one, not the name embedded in the hit.
#[must_use]
pub fn to_affiliations(hits: Vec<Entity<JobProperties>>, companies: &[Company]) -> Vec<AffiliationRecord> {
    let names: HashMap<&str, &str> = companies
        .iter()
        .map(|c| (c.uuid.as_str(), c.name.as_str()))
        .collect();
    let mut outside: HashSet<String> = HashSet::new();

    let records: Vec<AffiliationRecord> = hits
        .into_iter()
        .filter_map(|hit| {
            let props = hit.properties;
            let (Some(org), Some(person)) = (props.organization_identifier, props.person_identifier)
            else {
                tracing::debug!(job = %hit.uuid, "job without person or organization");
                return None;
            };
            let Some(company_name) = names.get(org.uuid.as_str()) else {
                outside.insert(org.uuid);
                return None;
            };
            Some(AffiliationRecord {
                company_uuid: org.uuid.clone(),
                company_name: (*company_name).to_string(),
                person_uuid: person.uuid,
                person_name: person.value,
                title: props.title,
                job_type: props.job_type.unwrap_or_default(),
                is_current: props.is_current,
            })
        })
        .collect();

    for company in &outside {
        tracing::warn!(company, "dropping affiliations for a company outside the resolved set");
    }
    records
}
