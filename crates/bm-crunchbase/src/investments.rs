//! Investment search and mapping of hits to [`InvestmentRecord`]s.

use std::collections::{HashMap, HashSet};

use bm_core::aggregate::dedupe_investments;
use bm_core::{Company, FundingRound, InvestmentRecord};

use crate::query::SearchQuery;
use crate::wire::{Entity, InvestmentProperties};
use crate::{Collection, CrunchbaseClient, CrunchbaseError, Paging};

impl CrunchbaseClient {
    /// Every investment made in `companies`, de-duplicated.
    ///
    /// # Errors
    ///
    /// Propagates search and pagination errors.
    pub async fn investments(
        &self,
        companies: &[Company],
        paging: Paging,
    ) -> Result<Vec<InvestmentRecord>, CrunchbaseError> {
        if companies.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<String> = companies.iter().map(|c| c.uuid.clone()).collect();
        let query = SearchQuery::investments(&ids, paging.page_size);
        let hits: Vec<Entity<InvestmentProperties>> =
            self.search_all(Collection::Investments, &query, paging).await?;
        Ok(to_investments(hits, companies))
    }
}

/// Map investment hits to de-duplicated records at resolved companies.
///
/// Investor names lose leading and trailing `-`. The round comes from the
/// investment title; an unrecognized label becomes
/// [`FundingRound::Unlabeled`]. Only the first listed partner is kept.
#[must_use]
pub fn to_investments(
    hits: Vec<Entity<InvestmentProperties>>,
    companies: &[Company],
) -> Vec<InvestmentRecord> {
    let names: HashMap<&str, &str> = companies
        .iter()
        .map(|c| (c.uuid.as_str(), c.name.as_str()))
        .collect();
    let mut outside: HashSet<String> = HashSet::new();

    let records: Vec<InvestmentRecord> = hits
        .into_iter()
        .filter_map(|hit| {
            let props = hit.properties;
            let (Some(org), Some(investor)) = (props.organization_identifier, props.investor_identifier)
            else {
                tracing::debug!(investment = %hit.uuid, "investment without investor or organization");
                return None;
            };
            let Some(company_name) = names.get(org.uuid.as_str()) else {
                outside.insert(org.uuid);
                return None;
            };

            let round = FundingRound::from_investment_title(&props.identifier.value).unwrap_or_else(|err| {
                tracing::warn!(title = %props.identifier.value, %err, "unrecognized round");
                FundingRound::Unlabeled
            });
            let partner = props.partner_identifiers.and_then(|p| p.into_iter().next());

            Some(InvestmentRecord {
                company_uuid: org.uuid.clone(),
                company_name: (*company_name).to_string(),
                investor_uuid: investor.uuid,
                investor_name: investor.value.trim_matches('-').to_string(),
                round,
                partner_uuid: partner.as_ref().map(|p| p.uuid.clone()),
                partner_name: partner.map(|p| p.value),
            })
        })
        .collect();

    for company in &outside {
        tracing::warn!(company, "dropping investments for a company outside the resolved set");
    }
    dedupe_investments(records)
}
