// Integration tests for the employee API client, against a mock server.

use hr_directory::api::ApiClient;
use hr_directory::error::ApiError;
use hr_directory::model::{Payload, normalize};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::task::spawn_blocking;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_records_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"employeeId": 1, "firstName": "Ann", "lastName": "Ito"},
            {"employeeId": 2, "firstName": "Bob"},
        ])))
        .mount(&server)
        .await;

    let uri = server.uri();
    let records = spawn_blocking(move || {
        let client = ApiClient::new(&uri).expect("client builds");
        client.fetch_list()
    })
    .await
    .unwrap()
    .expect("list fetch succeeds");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].row_cells()[1], "Ann");
    assert_eq!(records[1].row_cells()[1], "Bob");
}

#[tokio::test(flavor = "multi_thread")]
async fn lookup_wraps_a_single_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"employeeId": 7, "firstName": "Ann"}
        )))
        .mount(&server)
        .await;

    let uri = server.uri();
    let payload = spawn_blocking(move || {
        let client = ApiClient::new(&uri).expect("client builds");
        client.fetch_one("7")
    })
    .await
    .unwrap()
    .expect("lookup succeeds");

    assert!(matches!(payload, Payload::One(_)));
    let rows = normalize(payload);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].row_cells()[0], "7");
}

#[tokio::test(flavor = "multi_thread")]
async fn lookup_percent_encodes_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"employeeId": "a b/c&d"}
        )))
        .mount(&server)
        .await;

    let uri = server.uri();
    let payload = spawn_blocking(move || {
        let client = ApiClient::new(&uri).expect("client builds");
        client.fetch_one("a b/c&d")
    })
    .await
    .unwrap()
    .expect("encoded lookup succeeds");
    assert_eq!(normalize(payload).len(), 1);

    // Space, slash, and ampersand must survive unambiguously on the wire.
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/api/employees/a%20b%2Fc%26d");
}

#[tokio::test(flavor = "multi_thread")]
async fn null_body_normalizes_to_an_empty_sequence() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees/ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let uri = server.uri();
    let payload = spawn_blocking(move || {
        let client = ApiClient::new(&uri).expect("client builds");
        client.fetch_one("ghost")
    })
    .await
    .unwrap()
    .expect("lookup succeeds");

    assert_eq!(payload, Payload::Empty);
    assert!(normalize(payload).is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn not_found_carries_status_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees/ann"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = spawn_blocking(move || {
        let client = ApiClient::new(&uri).expect("client builds");
        client.fetch_one("ann")
    })
    .await
    .unwrap()
    .unwrap_err();

    assert_eq!(err, ApiError::Status(404));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_carries_status_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = spawn_blocking(move || {
        let client = ApiClient::new(&uri).expect("client builds");
        client.fetch_list()
    })
    .await
    .unwrap()
    .unwrap_err();

    assert_eq!(err.status_code(), 500);
}

#[tokio::test(flavor = "multi_thread")]
async fn transport_failure_has_status_zero() {
    // Bind a port, then drop the server so the connection is refused.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let err = spawn_blocking(move || {
        let client = ApiClient::new(&uri).expect("client builds");
        client.fetch_list()
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status_code(), 0);
}
