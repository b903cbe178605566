mod common;

use bm_core::Company;
use bm_crunchbase::wire::{Entity, JobProperties};
use bm_crunchbase::{Collection, CrunchbaseError, Paging, SearchQuery};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashSet;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client, mount_jobs_search};

fn acme() -> Vec<Company> {
    vec![Company {
        uuid: "c-1".into(),
        name: "Acme".into(),
    }]
}

#[tokio::test]
async fn walks_all_pages_with_one_count_call() {
    let server = MockServer::start().await;
    // 1 count call + ceil(25 / 10) page calls
    mount_jobs_search(&server, 25, 4).await;

    let paging = Paging {
        page_size: 10,
        max_pages: 100,
    };
    let records = client(&server).board_affiliations(&acme(), paging).await.unwrap();

    assert_eq!(records.len(), 25);
    let people: HashSet<&str> = records.iter().map(|r| r.person_uuid.as_str()).collect();
    assert_eq!(people.len(), 25);
    assert!(records.iter().all(|r| r.company_name == "Acme"));
}

#[tokio::test]
async fn exact_multiple_of_page_size() {
    let server = MockServer::start().await;
    mount_jobs_search(&server, 20, 3).await;

    let paging = Paging {
        page_size: 10,
        max_pages: 100,
    };
    let records = client(&server).board_affiliations(&acme(), paging).await.unwrap();
    assert_eq!(records.len(), 20);
}

#[tokio::test]
async fn empty_result_needs_only_the_count() {
    let server = MockServer::start().await;
    mount_jobs_search(&server, 0, 1).await;

    let records = client(&server)
        .board_affiliations(&acme(), Paging::default())
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn no_companies_means_no_requests() {
    let server = MockServer::start().await;
    mount_jobs_search(&server, 5, 0).await;

    let records = client(&server).investments(&[], Paging::default()).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn page_limit_is_enforced() {
    let server = MockServer::start().await;
    mount_jobs_search(&server, 50, 3).await;

    let paging = Paging {
        page_size: 10,
        max_pages: 2,
    };
    let err = client(&server)
        .board_affiliations(&acme(), paging)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CrunchbaseError::PageLimit {
            pages: 2,
            retrieved: 20,
            expected: 50,
            ..
        }
    ));
}

#[tokio::test]
async fn server_ignoring_cursor_is_no_progress() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/searches/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "entities": [
                {"uuid": "job-a", "properties": {}},
                {"uuid": "job-b", "properties": {}}
            ]
        })))
        .mount(&server)
        .await;

    let query = SearchQuery::board_affiliations(&["c-1".into()], 2);
    let err = client(&server)
        .search_all::<JobProperties>(Collection::Jobs, &query, Paging::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CrunchbaseError::NoProgress {
            pages: 2,
            retrieved: 2,
            ..
        }
    ));
}

#[tokio::test]
async fn structured_error_is_fatal_and_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/searches/investments"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!([
            {"code": "LA200", "message": "Invalid field_id 'foo'"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .investments(&acme(), Paging::default())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "From Crunchbase -- CODE LA200: Invalid field_id 'foo'"
    );
    assert_eq!(err.kind(), bm_crunchbase::ErrorKind::Fatal);
}

#[tokio::test]
async fn investments_are_mapped_and_deduplicated() {
    let server = MockServer::start().await;
    let hit = |uuid: &str, round: &str| {
        json!({
            "uuid": uuid,
            "properties": {
                "identifier": {"uuid": uuid, "value": format!("Accel investment in {round} - Acme")},
                "investor_identifier": {"uuid": "i-1", "value": "Accel"},
                "organization_identifier": {"uuid": "c-1", "value": "Acme"}
            }
        })
    };
    Mock::given(method("POST"))
        .and(path("/searches/investments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "entities": [hit("inv-1", "Seed Round"), hit("inv-2", "Seed Round"), hit("inv-3", "Series A")]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let records = client(&server)
        .investments(&acme(), Paging::default())
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn raw_pages_keep_cursor_order() {
    let server = MockServer::start().await;
    mount_jobs_search(&server, 7, 4).await;

    let query = SearchQuery::board_affiliations(&["c-1".into()], 3);
    let hits: Vec<Entity<JobProperties>> = client(&server)
        .search_all(Collection::Jobs, &query, Paging::default())
        .await
        .unwrap();
    let ids: Vec<&str> = hits.iter().map(|h| h.uuid.as_str()).collect();
    assert_eq!(
        ids,
        vec!["job-0", "job-1", "job-2", "job-3", "job-4", "job-5", "job-6"]
    );
}
