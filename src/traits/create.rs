//! Create trait for registering new tests.

use async_trait::async_trait;

use crate::client::ThousandEyesClient;
use crate::error::Result;

/// Create a new test.
///
/// The definition is borrowed, never consumed: on any failure the caller
/// still holds the original value and can retry unchanged.
///
/// # Example
///
/// ```ignore
/// use thousandeyes::{ThousandEyesClient, BgpTest, Create};
///
/// let client = ThousandEyesClient::from_env()?;
/// let definition = BgpTest::new("prefix watch", "192.0.2.0/24");
/// let created = BgpTest::create(&client, &definition).await?;
/// assert!(created.test_id.is_some());
/// ```
#[async_trait]
pub trait Create: Sized {
    /// Create the test and return the server's version of it, with
    /// server-assigned fields (ID, timestamps, links) populated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response status is not
    /// 201, or the response envelope cannot be decoded.
    async fn create(client: &ThousandEyesClient, test: &Self) -> Result<Self>;
}
