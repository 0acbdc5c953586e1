//! E2E tests using the mock ThousandEyes server.
//!
//! These tests exercise full workflows against the stateful mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use thousandeyes::mock_server::{Fixtures, MockServer, MockState};
use thousandeyes::{
    BgpTest, Create, Delete, Get, ThousandEyesClient, ThousandEyesError, Update,
};

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Test Lifecycle Workflow
// =============================================================================

#[tokio::test]
async fn test_create_get_update_delete_workflow() {
    let server = MockServer::start_empty().await;
    let client = ThousandEyesClient::new("test-token", server.url()).unwrap();

    // Step 1: Create a test
    let mut definition = BgpTest::new("Transit prefix watch", "203.0.113.0/24");
    definition.enabled = Some(true);
    definition.use_public_bgp = Some(true);

    let created = BgpTest::create(&client, &definition)
        .await
        .expect("Failed to create test");

    let id = created.test_id.expect("Server should assign an ID");
    assert_eq!(created.test_type.as_deref(), Some("bgp"));
    assert!(created.created_date.is_some());

    // Step 2: Fetch it back
    let fetched = BgpTest::get(&client, id).await.expect("Failed to get test");
    assert_eq!(fetched.test_name.as_deref(), Some("Transit prefix watch"));
    assert_eq!(fetched.enabled, Some(true));

    // Step 3: Update only the description; other fields must survive
    let changes = BgpTest {
        description: Some("moved to new transit provider".to_string()),
        ..BgpTest::default()
    };
    let updated = BgpTest::update(&client, id, &changes)
        .await
        .expect("Failed to update test");

    assert_eq!(
        updated.description.as_deref(),
        Some("moved to new transit provider")
    );
    assert_eq!(updated.prefix.as_deref(), Some("203.0.113.0/24"));
    assert_eq!(updated.enabled, Some(true));

    // Step 4: Delete and verify it's gone
    BgpTest::delete(&client, id)
        .await
        .expect("Failed to delete test");

    let result = BgpTest::get(&client, id).await;
    assert!(matches!(
        result,
        Err(ThousandEyesError::UnexpectedStatus { status: 404, .. })
    ));

    server.shutdown().await;
}

#[tokio::test]
async fn test_attach_alert_rule_and_update() {
    let server = MockServer::start().await;
    let client = ThousandEyesClient::new("test-token", server.url()).unwrap();

    let mut test = BgpTest::get(&client, 102).await.expect("Failed to get test");
    test.add_alert_rule(42);

    let updated = BgpTest::update(&client, 102, &test)
        .await
        .expect("Failed to update test");

    let rules = updated.alert_rules.expect("Alert rules should be set");
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].rule_id, Some(42));

    server.shutdown().await;
}

#[tokio::test]
async fn test_get_unknown_test_is_not_found() {
    let server = MockServer::start().await;
    let client = ThousandEyesClient::new("test-token", server.url()).unwrap();

    let err = BgpTest::get(&client, 999999).await.unwrap_err();

    match err {
        ThousandEyesError::UnexpectedStatus {
            status, message, ..
        } => {
            assert_eq!(status, 404);
            assert!(message.contains("999999"));
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }

    server.shutdown().await;
}

// =============================================================================
// Wire Format
// =============================================================================

#[tokio::test]
async fn test_server_emits_integer_wire_booleans() {
    let state = MockState::new().with_test(Fixtures::monitored_bgp(
        7,
        "Edge prefix",
        "198.51.100.0/24",
    ));
    let server = MockServer::with_state(state).await;

    // Inspect the raw JSON, bypassing the typed client
    let raw: serde_json::Value = reqwest::Client::new()
        .get(format!("{}/tests/7", server.url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse body");

    let test = &raw["test"][0];
    assert_eq!(test["enabled"], serde_json::json!(1));
    assert_eq!(test["savedEvent"], serde_json::json!(0));
    assert_eq!(test["usePublicBgp"], serde_json::json!(1));

    server.shutdown().await;
}
