//! ThousandEyes API client library.
//!
//! A Rust library for interacting with the ThousandEyes REST API using a
//! trait-based architecture where each operation (Get, Create, Update,
//! Delete) is defined as a trait that test types implement. Currently
//! covers the BGP trace test resource.
//!
//! # Quick Start
//!
//! ```no_run
//! use thousandeyes::{BgpTest, Create, Delete, Get, ThousandEyesClient, Update};
//!
//! #[tokio::main]
//! async fn main() -> thousandeyes::Result<()> {
//!     // Create client from environment variables
//!     let client = ThousandEyesClient::from_env()?;
//!
//!     // Define and create a BGP test
//!     let mut definition = BgpTest::new("prefix watch", "192.0.2.0/24");
//!     definition.enabled = Some(true);
//!     definition.use_public_bgp = Some(true);
//!     let created = BgpTest::create(&client, &definition).await?;
//!
//!     // Fetch it back by its server-assigned ID
//!     let id = created.test_id.expect("server assigns an ID");
//!     let fetched = BgpTest::get(&client, id).await?;
//!     println!("Test: {:?}", fetched.test_name);
//!
//!     // Clean up
//!     BgpTest::delete(&client, id).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Wire format
//!
//! The ThousandEyes API transmits several logically-boolean fields as the
//! integers `0`/`1`. The models expose them as `Option<bool>` and convert
//! at the serialization boundary; a wire value other than `0` or `1` for
//! such a field is a decode error. Every model field is optional in both
//! directions: unset fields are omitted from request bodies, and fields
//! absent from a response stay `None`.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `THOUSANDEYES_API_TOKEN` (required) - Your ThousandEyes API token
//! - `THOUSANDEYES_API_URL` (optional) - Base URL (defaults to
//!   `https://api.thousandeyes.com/v6`)

mod client;
mod error;
mod models;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::ThousandEyesClient;
pub use error::{Result, ThousandEyesError};

// Re-export traits
pub use traits::{Create, Delete, Get, Update};

// Re-export models
pub use models::{AlertRule, ApiLink, BgpMonitor, BgpTest, GroupLabel, SharedWithAccount};
