//! Mock ThousandEyes API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! ThousandEyes test endpoints for integration and end-to-end testing.
//! Unlike wiremock which mocks at the HTTP level per-test, this server
//! maintains state across requests, enabling realistic workflow testing.
//!
//! Responses are serialized through the real model types, so wire-boolean
//! fields come back as integers exactly as the live API sends them.
//!
//! # Example
//!
//! ```ignore
//! use thousandeyes::mock_server::MockServer;
//! use thousandeyes::{BgpTest, Get, ThousandEyesClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = ThousandEyesClient::new("test-token", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let test = BgpTest::get(&client, 101).await.unwrap();
//!     assert_eq!(test.test_name.as_deref(), Some("Backbone prefix watch"));
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
