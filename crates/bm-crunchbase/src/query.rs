//! Search request bodies.
//!
//! A search is a list of requested fields, a list of predicates that are
//! AND-ed together, a page limit and an optional `after_id` cursor.

use bm_core::MAX_PAGE_SIZE;
use serde::Serialize;

/// Job types that are not board relationships.
const NON_BOARD_JOB_TYPES: [&str; 2] = ["employee", "executive"];

const BOARD_AFFILIATION_FIELDS: [&str; 9] = [
    "identifier",
    "job_type",
    "name",
    "organization_identifier",
    "person_identifier",
    "short_description",
    "is_current",
    "title",
    "uuid",
];

const INVESTMENT_FIELDS: [&str; 5] = [
    "identifier",
    "name",
    "investor_identifier",
    "organization_identifier",
    "partner_identifiers",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Includes,
    NotIncludes,
}

/// One filter clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    #[serde(rename = "type")]
    kind: &'static str,
    pub field_id: String,
    pub operator_id: Operator,
    pub values: Vec<String>,
}

impl Predicate {
    #[must_use]
    pub fn new(field_id: &str, operator_id: Operator, values: Vec<String>) -> Self {
        Self {
            kind: "predicate",
            field_id: field_id.to_string(),
            operator_id,
            values,
        }
    }
}

/// Body of a `POST /searches/{collection}` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub field_ids: Vec<String>,
    pub query: Vec<Predicate>,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<String>,
}

impl SearchQuery {
    fn new(fields: &[&str], query: Vec<Predicate>, limit: u32) -> Self {
        Self {
            field_ids: fields.iter().map(ToString::to_string).collect(),
            query,
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            after_id: None,
        }
    }

    /// Current and former board-type jobs at the given organizations.
    ///
    /// Employee and executive jobs are excluded, leaving board members,
    /// advisors and observers.
    #[must_use]
    pub fn board_affiliations(company_ids: &[String], limit: u32) -> Self {
        Self::new(
            &BOARD_AFFILIATION_FIELDS,
            vec![
                Predicate::new("organization_identifier", Operator::Includes, company_ids.to_vec()),
                Predicate::new(
                    "job_type",
                    Operator::NotIncludes,
                    NON_BOARD_JOB_TYPES.iter().map(ToString::to_string).collect(),
                ),
            ],
            limit,
        )
    }

    /// Every investment made in the given organizations.
    #[must_use]
    pub fn investments(company_ids: &[String], limit: u32) -> Self {
        Self::new(
            &INVESTMENT_FIELDS,
            vec![Predicate::new(
                "organization_identifier",
                Operator::Includes,
                company_ids.to_vec(),
            )],
            limit,
        )
    }

    /// Copy of this query starting after `cursor` (or from the start for `None`).
    #[must_use]
    pub fn with_cursor(&self, cursor: Option<String>) -> Self {
        Self {
            after_id: cursor,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn board_affiliation_query_shape() {
        let query = SearchQuery::board_affiliations(&["c-1".into(), "c-2".into()], 1000);
        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(
            body["query"],
            json!([
                {
                    "type": "predicate",
                    "field_id": "organization_identifier",
                    "operator_id": "includes",
                    "values": ["c-1", "c-2"]
                },
                {
                    "type": "predicate",
                    "field_id": "job_type",
                    "operator_id": "not_includes",
                    "values": ["employee", "executive"]
                }
            ])
        );
        assert_eq!(body["limit"], 1000);
        assert!(body.get("after_id").is_none());
        assert!(query.field_ids.contains(&"is_current".to_string()));
    }

    #[test]
    fn investment_query_shape() {
        let query = SearchQuery::investments(&["c-1".into()], 50);
        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(body["query"].as_array().unwrap().len(), 1);
        assert_eq!(body["query"][0]["values"], json!(["c-1"]));
        assert_eq!(body["limit"], 50);
        assert!(query.field_ids.contains(&"partner_identifiers".to_string()));
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(SearchQuery::investments(&[], 5000).limit, MAX_PAGE_SIZE);
        assert_eq!(SearchQuery::investments(&[], 0).limit, 1);
    }

    #[test]
    fn cursor_is_serialized_only_when_set() {
        let base = SearchQuery::investments(&["c-1".into()], 10);
        let next = base.with_cursor(Some("last-uuid".into()));
        let body = serde_json::to_value(&next).unwrap();
        assert_eq!(body["after_id"], "last-uuid");

        let reset = next.with_cursor(None);
        assert_eq!(reset, base);
    }
}
