//! Integration tests for the paginated WaniKani fetcher

use kanilog::adapters::wanikani::{collection_url, RecordSource, WaniKaniClient};
use kanilog::config::{secret_string, WaniKaniConfig};
use kanilog::domain::{KanilogError, SourceApiError};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn config(server: &ServerGuard) -> WaniKaniConfig {
    WaniKaniConfig {
        base_url: server.url(),
        api_token: Some(secret_string("wk-test-token".to_string())),
        timeout_seconds: 5,
        ..Default::default()
    }
}

fn page(ids: &[u64], next_url: Option<String>) -> String {
    let data: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": id, "object": "review_statistic", "data": {"subject_id": id}}))
        .collect();
    json!({
        "object": "collection",
        "data": data,
        "pages": {"per_page": 500, "next_url": next_url, "previous_url": null}
    })
    .to_string()
}

#[tokio::test]
async fn test_follows_next_url_until_null() {
    let mut server = Server::new_async().await;
    let base = server.url();

    let first = server
        .mock("GET", "/review_statistics")
        .match_header("authorization", "Bearer wk-test-token")
        .match_header("wanikani-revision", "20170710")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page(
            &[1, 2],
            Some(format!("{base}/review_statistics?page_after_id=2")),
        ))
        .expect(1)
        .create_async()
        .await;

    let second = server
        .mock("GET", "/review_statistics?page_after_id=2")
        .match_header("authorization", "Bearer wk-test-token")
        .with_status(200)
        .with_body(page(
            &[3, 4],
            Some(format!("{base}/review_statistics?page_after_id=4")),
        ))
        .expect(1)
        .create_async()
        .await;

    let third = server
        .mock("GET", "/review_statistics?page_after_id=4")
        .with_status(200)
        .with_body(page(&[5], None))
        .expect(1)
        .create_async()
        .await;

    let client = WaniKaniClient::new(config(&server)).unwrap();
    let url = collection_url(client.base_url(), "review_statistics", &[]).unwrap();
    let records = client.fetch_all(&url).await.unwrap();

    let ids: Vec<u64> = records
        .iter()
        .map(|r| r.field("id").unwrap().as_u64().unwrap())
        .collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
}

#[tokio::test]
async fn test_empty_collection() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/study_materials")
        .with_status(200)
        .with_body(page(&[], None))
        .expect(1)
        .create_async()
        .await;

    let client = WaniKaniClient::new(config(&server)).unwrap();
    let records = client
        .fetch_all(&format!("{}/study_materials", server.url()))
        .await
        .unwrap();

    assert!(records.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_type_filter_in_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/subjects")
        .match_query(Matcher::UrlEncoded("types".into(), "kana_vocabulary".into()))
        .with_status(200)
        .with_body(page(&[9], None))
        .expect(1)
        .create_async()
        .await;

    let client = WaniKaniClient::new(config(&server)).unwrap();
    let url = collection_url(client.base_url(), "subjects", &[("types", "kana_vocabulary")]).unwrap();
    let records = client.fetch_all(&url).await.unwrap();

    assert_eq!(records.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_is_fatal() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/review_statistics")
        .with_status(401)
        .with_body(r#"{"error":"Unauthorized. Nice try.","code":401}"#)
        .create_async()
        .await;

    let client = WaniKaniClient::new(config(&server)).unwrap();
    let err = client
        .fetch_all(&format!("{}/review_statistics", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        KanilogError::SourceApi(SourceApiError::AuthenticationFailed { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_error_on_later_page_discards_partial_result() {
    let mut server = Server::new_async().await;
    let base = server.url();

    let _mock = server
        .mock("GET", "/level_progressions")
        .with_status(200)
        .with_body(page(
            &[1],
            Some(format!("{base}/level_progressions?page_after_id=1")),
        ))
        .create_async()
        .await;
    let _mock = server
        .mock("GET", "/level_progressions?page_after_id=1")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let client = WaniKaniClient::new(config(&server)).unwrap();
    let err = client
        .fetch_all(&format!("{base}/level_progressions"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        KanilogError::SourceApi(SourceApiError::ServerError { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_page_without_pages_key_is_malformed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/subjects")
        .with_status(200)
        .with_body(r#"{"object":"collection","data":[]}"#)
        .create_async()
        .await;

    let client = WaniKaniClient::new(config(&server)).unwrap();
    let err = client
        .fetch_all(&format!("{}/subjects", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        KanilogError::SourceApi(SourceApiError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/subjects")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let client = WaniKaniClient::new(config(&server)).unwrap();
    let result = client.fetch_all(&format!("{}/subjects", server.url())).await;

    assert!(matches!(
        result,
        Err(KanilogError::SourceApi(SourceApiError::InvalidResponse(_)))
    ));
}
