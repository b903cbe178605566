//! Mock API servers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bm_crunchbase::CrunchbaseClient;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const USER_KEY: &str = "test-key";

pub fn client(server: &MockServer) -> CrunchbaseClient {
    CrunchbaseClient::new(&server.uri(), USER_KEY, Duration::from_secs(5)).unwrap()
}

/// Serves `total` job hits (`job-0`, `job-1`, ...) honouring `limit` and
/// `after_id` from the request body, like the real search endpoint.
pub struct PagedJobs {
    pub total: usize,
    pub company: &'static str,
}

impl PagedJobs {
    fn hit(&self, index: usize) -> Value {
        json!({
            "uuid": format!("job-{index}"),
            "properties": {
                "job_type": if index % 2 == 0 { "board_member" } else { "advisor" },
                "organization_identifier": {"uuid": self.company, "value": "Acme"},
                "person_identifier": {"uuid": format!("p-{index}"), "value": format!("Person {index}")},
                "is_current": index % 3 != 0,
                "title": "Director"
            }
        })
    }
}

impl Respond for PagedJobs {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let limit = usize::try_from(body["limit"].as_u64().unwrap()).unwrap();
        let start = body["after_id"].as_str().map_or(0, |cursor| {
            cursor.trim_start_matches("job-").parse::<usize>().unwrap() + 1
        });
        let end = (start + limit).min(self.total);
        let entities: Vec<Value> = (start..end).map(|i| self.hit(i)).collect();
        ResponseTemplate::new(200).set_body_json(json!({
            "count": self.total,
            "entities": entities
        }))
    }
}

/// Mounts a paged jobs search expected to be hit exactly `calls` times.
pub async fn mount_jobs_search(server: &MockServer, total: usize, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/searches/jobs"))
        .and(query_param("user_key", USER_KEY))
        .respond_with(PagedJobs {
            total,
            company: "c-1",
        })
        .expect(calls)
        .mount(server)
        .await;
}

pub async fn mount_autocomplete(server: &MockServer, query: &str, entities: Value) {
    Mock::given(method("GET"))
        .and(path("/autocompletes"))
        .and(query_param("query", query))
        .and(query_param("collection_ids", "organizations"))
        .and(query_param("user_key", USER_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "entities": entities })))
        .mount(server)
        .await;
}

pub fn person_body(uuid: &str, name: &str, complete: bool) -> Value {
    if complete {
        json!({
            "properties": {
                "identifier": {"uuid": uuid, "value": name},
                "primary_job_title": "CEO",
                "primary_organization": {"uuid": "org-1", "value": "Initech"},
                "linkedin": {"value": format!("https://www.linkedin.com/in/{uuid}")}
            }
        })
    } else {
        json!({
            "properties": {
                "identifier": {"uuid": uuid, "value": name}
            }
        })
    }
}

pub fn person_path(uuid: &str) -> String {
    format!("/entities/people/{uuid}")
}
