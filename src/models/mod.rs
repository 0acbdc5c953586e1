//! ThousandEyes API model types.

mod bgp;
mod common;

pub use bgp::{BgpMonitor, BgpTest};
pub use common::{AlertRule, ApiLink, GroupLabel, SharedWithAccount};

use serde::Deserialize;

use crate::error::{Result, ThousandEyesError};

/// API response wrapper: the test endpoints wrap every result in
/// `{"test": [...]}`, even when exactly one element is expected.
#[derive(Debug, Deserialize)]
pub(crate) struct TestEnvelope<T> {
    test: Vec<T>,
}

impl<T> TestEnvelope<T> {
    /// Unwrap the envelope's sole element.
    ///
    /// The API documents a one-element list for get/create/update
    /// responses; an empty list is reported as a decode failure rather
    /// than indexed blindly.
    pub(crate) fn into_single(self) -> Result<T> {
        self.test
            .into_iter()
            .next()
            .ok_or(ThousandEyesError::EmptyEnvelope)
    }
}
