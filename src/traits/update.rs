//! Update trait for modifying existing tests.

use async_trait::async_trait;

use crate::client::ThousandEyesClient;
use crate::error::Result;

/// Update an existing test.
///
/// Only the fields set on the provided definition are sent; unset fields
/// are omitted from the request body and left untouched server-side. The
/// definition is borrowed, so the caller keeps the original on failure.
///
/// # Example
///
/// ```ignore
/// use thousandeyes::{ThousandEyesClient, BgpTest, Update};
///
/// let client = ThousandEyesClient::from_env()?;
/// let changes = BgpTest {
///     description: Some("now with covered prefixes".to_string()),
///     include_covered_prefixes: Some(true),
///     ..BgpTest::default()
/// };
/// let updated = BgpTest::update(&client, 817, &changes).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this test.
    type Id;

    /// Update the test and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response status is not
    /// 200, or the response envelope cannot be decoded.
    async fn update(client: &ThousandEyesClient, id: Self::Id, test: &Self) -> Result<Self>;
}
