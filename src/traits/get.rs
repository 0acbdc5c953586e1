//! Get trait for fetching single tests.

use async_trait::async_trait;

use crate::client::ThousandEyesClient;
use crate::error::Result;

/// Fetch a single test by ID.
///
/// Implement this trait for test types that can be fetched individually
/// by their numeric test ID.
///
/// # Example
///
/// ```ignore
/// use thousandeyes::{ThousandEyesClient, BgpTest, Get};
///
/// let client = ThousandEyesClient::from_env()?;
/// let test = BgpTest::get(&client, 817).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this test (typically `i64`).
    type Id;

    /// Fetch the test by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response status is not
    /// 200, or the response envelope cannot be decoded.
    async fn get(client: &ThousandEyesClient, id: Self::Id) -> Result<Self>;
}
