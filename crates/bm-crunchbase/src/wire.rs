//! Response shapes of the search, lookup and entity endpoints.
//!
//! Only the fields this crate reads are declared; everything else in the
//! payload is ignored.

use serde::Deserialize;

/// Reference to another entity: `{"uuid": .., "value": <display name>}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identifier {
    pub uuid: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub permalink: Option<String>,
}

/// One search page.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de>"))]
pub struct SearchResponse<P> {
    /// Total number of matches across all pages.
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub entities: Vec<Entity<P>>,
}

/// Search hit: its identifier plus the requested properties.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity<P> {
    pub uuid: String,
    pub properties: P,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobProperties {
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub organization_identifier: Option<Identifier>,
    #[serde(default)]
    pub person_identifier: Option<Identifier>,
    #[serde(default)]
    pub is_current: Option<bool>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvestmentProperties {
    /// Its `value` is the investment title, which names the round.
    pub identifier: Identifier,
    #[serde(default)]
    pub investor_identifier: Option<Identifier>,
    #[serde(default)]
    pub organization_identifier: Option<Identifier>,
    #[serde(default)]
    pub partner_identifiers: Option<Vec<Identifier>>,
}

/// Only the count matters for the counting call.
#[derive(Debug, Deserialize)]
pub struct CountResponse {
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub entities: Vec<AutocompleteEntity>,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteEntity {
    pub identifier: Identifier,
    #[serde(default)]
    pub short_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PersonResponse {
    pub properties: PersonProperties,
}

#[derive(Debug, Deserialize)]
pub struct PersonProperties {
    pub identifier: Identifier,
    #[serde(default)]
    pub primary_job_title: Option<String>,
    #[serde(default)]
    pub primary_organization: Option<Identifier>,
    #[serde(default)]
    pub linkedin: Option<Link>,
}

#[derive(Debug, Deserialize)]
pub struct Link {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOBS_FIXTURE: &str = r#"{
        "count": 2,
        "entities": [
            {
                "uuid": "job-1",
                "properties": {
                    "identifier": {"uuid": "job-1", "value": "Board Member @ Acme"},
                    "job_type": "board_member",
                    "organization_identifier": {"uuid": "c-1", "value": "Acme", "permalink": "acme"},
                    "person_identifier": {"uuid": "p-1", "value": "Ada Lovelace"},
                    "is_current": true,
                    "title": "Board Member"
                }
            },
            {
                "uuid": "job-2",
                "properties": {
                    "job_type": "advisor",
                    "organization_identifier": {"uuid": "c-1", "value": "Acme"},
                    "person_identifier": {"uuid": "p-2", "value": "Alan Turing"}
                }
            }
        ]
    }"#;

    #[test]
    fn parse_jobs_page() {
        let page: SearchResponse<JobProperties> = serde_json::from_str(JOBS_FIXTURE).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.entities.len(), 2);

        let first = &page.entities[0].properties;
        assert_eq!(first.job_type.as_deref(), Some("board_member"));
        assert_eq!(first.is_current, Some(true));
        assert_eq!(
            first.organization_identifier.as_ref().unwrap().permalink.as_deref(),
            Some("acme")
        );

        let second = &page.entities[1].properties;
        assert_eq!(second.is_current, None);
        assert!(second.title.is_none());
    }

    #[test]
    fn parse_person_without_optional_fields() {
        let body = r#"{"properties": {"identifier": {"uuid": "p-9", "value": "Grace Hopper"}}}"#;
        let person: PersonResponse = serde_json::from_str(body).unwrap();
        assert_eq!(person.properties.identifier.value, "Grace Hopper");
        assert!(person.properties.primary_job_title.is_none());
        assert!(person.properties.primary_organization.is_none());
        assert!(person.properties.linkedin.is_none());
    }

    #[test]
    fn parse_investment_with_partners() {
        let body = r#"{
            "uuid": "inv-1",
            "properties": {
                "identifier": {"uuid": "inv-1", "value": "Accel investment in Series A - Acme"},
                "investor_identifier": {"uuid": "i-1", "value": "Accel"},
                "organization_identifier": {"uuid": "c-1", "value": "Acme"},
                "partner_identifiers": [{"uuid": "pt-1", "value": "Jane Doe"}]
            }
        }"#;
        let entity: Entity<InvestmentProperties> = serde_json::from_str(body).unwrap();
        let partners = entity.properties.partner_identifiers.unwrap();
        assert_eq!(partners.len(), 1);
        assert_eq!(partners[0].value, "Jane Doe");
    }

    fn parse_page<P: serde::de::DeserializeOwned>(body: &str) -> SearchResponse<P> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn generic_page_without_default_properties() {
        let jobs = parse_page::<JobProperties>(JOBS_FIXTURE);
        assert_eq!(jobs.entities.len(), 2);

        let empty = parse_page::<InvestmentProperties>(r#"{"count": 0}"#);
        assert_eq!(empty.count, 0);
        assert!(empty.entities.is_empty());
    }
}
