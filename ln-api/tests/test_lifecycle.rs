//! Integration tests for client lifecycle: close, scoped guard and shared use.

mod common;

use std::sync::Arc;

use httpmock::prelude::*;
use ln_api::{ApiClient, Session};
use ln_core::config::ClientConfig;
use ln_core::LnError;
use serde_json::json;

#[test]
fn close_without_requests_does_not_fail() {
    let client = ApiClient::from_api_key("ln_test_unused").unwrap();
    assert!(!client.is_closed());
    client.close();
    client.close();
    assert!(client.is_closed());
}

#[tokio::test]
async fn requests_after_close_fail_without_network() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path_includes("/");
            then.status(200).json_body(json!({"success": true}));
        })
        .await;

    let (path, _dir) = common::temp_file("photo.jpg", b"data");
    let client = common::client_for(&server);
    client.close();

    assert!(matches!(client.get_stats().await, Err(LnError::Closed)));
    assert!(matches!(client.delete_file("img_1").await, Err(LnError::Closed)));
    assert!(matches!(client.upload(&path).await, Err(LnError::Closed)));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn scoped_guard_closes_on_normal_exit() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/stats");
            then.status(200).json_body(json!({"file_count": 1}));
        })
        .await;

    let client = common::client_for(&server);
    {
        let scoped = client.scoped();
        let stats = scoped.get_stats().await.unwrap();
        assert_eq!(stats.file_count(), Some(1));
        assert!(!scoped.is_closed());
    }
    assert!(client.is_closed());
}

#[tokio::test]
async fn scoped_guard_closes_on_error_exit() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/i/img_missing");
            then.status(404).json_body(json!({"error": {"message": "File not found"}}));
        })
        .await;

    async fn delete_twice(client: &ApiClient) -> Result<(), LnError> {
        let scoped = client.scoped();
        scoped.delete_file("img_missing").await?;
        scoped.delete_file("img_missing").await?;
        Ok(())
    }

    let client = common::client_for(&server);
    let err = delete_twice(&client).await.unwrap_err();

    assert_eq!(err.api_message(), Some("File not found"));
    assert!(client.is_closed());
}

#[test]
fn scoped_guard_closes_on_panic() {
    let client = ApiClient::from_api_key("ln_test_panic").unwrap();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _scoped = client.scoped();
        panic!("boom");
    }));
    assert!(result.is_err());
    assert!(client.is_closed());
}

#[tokio::test]
async fn explicit_session_carries_bearer_header() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/stats")
                .header("authorization", "Bearer ln_test_session");
            then.status(200).json_body(json!({}));
        })
        .await;

    let session = Session::new(&ClientConfig::new("ln_test_session")).unwrap();
    let client = ApiClient::with_session(&server.base_url(), session);
    client.get_stats().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn shared_client_serves_concurrent_tasks() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/stats")
                .header("authorization", common::bearer());
            then.status(200).json_body(json!({"file_count": 7}));
        })
        .await;

    let client = Arc::new(common::client_for(&server));
    let mut handles = Vec::new();
    for _ in 0..4 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move { client.get_stats().await }));
    }
    for handle in handles {
        let stats = handle.await.unwrap().unwrap();
        assert_eq!(stats.file_count(), Some(7));
    }

    mock.assert_hits_async(4).await;
}
