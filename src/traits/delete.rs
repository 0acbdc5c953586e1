//! Delete trait for removing tests.

use async_trait::async_trait;

use crate::client::ThousandEyesClient;
use crate::error::Result;

/// Delete an existing test.
#[async_trait]
pub trait Delete {
    /// The ID type for this test.
    type Id;

    /// Delete the test.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response status is
    /// not 204.
    async fn delete(client: &ThousandEyesClient, id: Self::Id) -> Result<()>;
}
