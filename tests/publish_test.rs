//! Integration tests for publishing to the dataset hub

use kanilog::adapters::hub::{DatasetPublisher, HubClient};
use kanilog::config::{secret_string, HubConfig};
use kanilog::domain::{KanilogError, PublishError, RepoId};
use mockito::{Matcher, Server, ServerGuard};
use std::fs;
use tempfile::TempDir;

const COMMIT_RESPONSE: &str =
    r#"{"success":true,"commitOid":"0123abcd","commitUrl":"https://huggingface.co/commit/0123abcd"}"#;

fn client(server: &ServerGuard) -> HubClient {
    HubClient::new(HubConfig {
        endpoint: server.url(),
        token: Some(secret_string("hf_test".to_string())),
        timeout_seconds: 5,
        ..Default::default()
    })
    .unwrap()
}

fn repo(id: &str) -> RepoId {
    RepoId::new(id).unwrap()
}

#[tokio::test]
async fn test_upload_file_creates_commit() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/datasets/osbm/wanikani-logs/commit/main")
        .match_header("authorization", "Bearer hf_test")
        .match_header("content-type", "application/x-ndjson")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#""key":"header""#.to_string()),
            Matcher::Regex(r#""path":"reviews/2024-03-09_reviews.csv""#.to_string()),
            Matcher::Regex(r#""encoding":"base64""#.to_string()),
            // base64("review_id\n1\n")
            Matcher::Regex("cmV2aWV3X2lkCjEK".to_string()),
        ]))
        .with_status(200)
        .with_body(COMMIT_RESPONSE)
        .expect(1)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let local = dir.path().join("2024-03-09_reviews.csv");
    fs::write(&local, "review_id\n1\n").unwrap();

    client(&server)
        .upload_file(
            &repo("osbm/wanikani-logs"),
            &local,
            "reviews/2024-03-09_reviews.csv",
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_folder_selects_json_files() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/datasets/osbm/wanikani-dataset/commit/main")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#""path":"everything.json""#.to_string()),
            Matcher::Regex(r#""path":"kanji.json""#.to_string()),
        ]))
        .with_status(200)
        .with_body(COMMIT_RESPONSE)
        .expect(1)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("everything.json"), "[]").unwrap();
    fs::write(dir.path().join("kanji.json"), "[]").unwrap();
    fs::write(dir.path().join("2024-03-09_reviews.csv"), "review_id\n").unwrap();
    fs::write(dir.path().join(".secret.json"), "{}").unwrap();

    let uploaded = client(&server)
        .upload_folder(&repo("osbm/wanikani-dataset"), dir.path(), "*.json")
        .await
        .unwrap();

    assert_eq!(uploaded, ["everything.json", "kanji.json"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_folder_without_matches_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("2024-03-09_reviews.csv"), "review_id\n").unwrap();

    let uploaded = client(&server)
        .upload_folder(&repo("osbm/wanikani-dataset"), dir.path(), "*.json")
        .await
        .unwrap();

    assert!(uploaded.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_token() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/datasets/osbm/wanikani-logs/commit/main")
        .with_status(401)
        .with_body(r#"{"error":"Invalid credentials in Authorization header"}"#)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let local = dir.path().join("a.csv");
    fs::write(&local, "x\n").unwrap();

    let err = client(&server)
        .upload_file(&repo("osbm/wanikani-logs"), &local, "reviews/a.csv")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        KanilogError::Publish(PublishError::AuthenticationFailed(_))
    ));
}

#[tokio::test]
async fn test_missing_repository() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/datasets/osbm/missing/commit/main")
        .with_status(404)
        .with_body(r#"{"error":"Repository not found"}"#)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let local = dir.path().join("a.csv");
    fs::write(&local, "x\n").unwrap();

    let err = client(&server)
        .upload_file(&repo("osbm/missing"), &local, "reviews/a.csv")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        KanilogError::Publish(PublishError::RepositoryNotFound(_))
    ));
}

#[tokio::test]
async fn test_missing_local_file() {
    let server = Server::new_async().await;
    let dir = TempDir::new().unwrap();

    let err = client(&server)
        .upload_file(
            &repo("osbm/wanikani-logs"),
            &dir.path().join("absent.csv"),
            "reviews/absent.csv",
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        KanilogError::Publish(PublishError::ArtifactUnavailable(_))
    ));
}
