use super::*;
use serde_json::json;
use std::sync::Mutex;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERS: Endpoint = Endpoint::new("/v2/users", "users");

/// Fake client serving a fixed sequence of pages, counting requests
struct PagedFake {
    pages: Mutex<std::vec::IntoIter<Vec<Record>>>,
    requests: Mutex<u32>,
}

impl PagedFake {
    fn new(pages: Vec<Vec<Record>>) -> Self {
        Self {
            pages: Mutex::new(pages.into_iter()),
            requests: Mutex::new(0),
        }
    }

    fn request_count(&self) -> u32 {
        *self.requests.lock().unwrap()
    }
}

#[async_trait]
impl ApiClient for PagedFake {
    async fn list_page(
        &self,
        _endpoint: &Endpoint,
        _page_size: u32,
        _after: Option<&str>,
    ) -> Result<Page> {
        *self.requests.lock().unwrap() += 1;
        let items = self.pages.lock().unwrap().next().unwrap_or_default();
        Ok(Page { items })
    }

    async fn list(&self, _endpoint: &Endpoint, _params: &[(&str, &str)]) -> Result<Vec<Record>> {
        Ok(Vec::new())
    }
}

fn record(id: &str) -> Record {
    json!({"id": id}).as_object().cloned().unwrap()
}

#[tokio::test]
async fn test_paginate_accumulates_until_empty_page() {
    // Pages of sizes [2, 2, 0]: four elements over exactly three requests
    let fake = PagedFake::new(vec![
        vec![record("a"), record("b")],
        vec![record("c"), record("d")],
        vec![],
    ]);

    let records = paginate(&fake, &USERS, 2).await.unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(fake.request_count(), 3);
    let ids: Vec<_> = records
        .iter()
        .map(|r| r.get("id").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
}

#[tokio::test]
async fn test_paginate_single_empty_page() {
    let fake = PagedFake::new(vec![vec![]]);
    let records = paginate(&fake, &USERS, 250).await.unwrap();
    assert!(records.is_empty());
    assert_eq!(fake.request_count(), 1);
}

#[tokio::test]
async fn test_paginate_requires_id_cursor() {
    let fake = PagedFake::new(vec![vec![json!({"name": "no id"}).as_object().cloned().unwrap()]]);
    let err = paginate(&fake, &USERS, 250).await.unwrap_err();
    assert!(err.to_string().contains("no string 'id'"));
}

#[tokio::test]
async fn test_http_client_sends_bearer_auth_and_unwraps_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/users"))
        .and(header("authorization", "Bearer test-key"))
        .and(query_param("page_size", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"id": "u1", "name": "Alex"}],
            "pagination_meta": {"page_size": 250}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpApiClient::new(&server.uri(), "test-key").unwrap();
    let page = client.list_page(&USERS, 250, None).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].get("id").unwrap(), "u1");
}

#[tokio::test]
async fn test_http_client_passes_after_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/users"))
        .and(query_param("after", "u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpApiClient::new(&server.uri(), "test-key").unwrap();
    let page = client.list_page(&USERS, 250, Some("u1")).await.unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_http_client_surfaces_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/users"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let client = HttpApiClient::new(&server.uri(), "bad-key").unwrap();
    let err = client.list_page(&USERS, 250, None).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "unauthorized");
        }
        other => panic!("expected HttpStatus error, got: {other}"),
    }
}

#[tokio::test]
async fn test_http_client_rejects_missing_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = HttpApiClient::new(&server.uri(), "test-key").unwrap();
    let err = client.list_page(&USERS, 250, None).await.unwrap_err();
    assert!(err.to_string().contains("no 'users' array"));
}
