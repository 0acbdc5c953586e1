//! Mock server state management.
//!
//! Provides the in-memory data store for the mock ThousandEyes API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::BgpTest;

/// Shared state for the mock server.
///
/// Holds all the mock test data the server will serve, keyed by test ID.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Tests indexed by test ID.
    pub tests: HashMap<i64, BgpTest>,

    /// Next ID handed out by create.
    next_id: i64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            tests: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a test to the state. The test must already carry an ID.
    pub fn with_test(mut self, test: BgpTest) -> Self {
        let id = test.test_id.expect("fixture test must have an ID");
        self.next_id = self.next_id.max(id + 1);
        self.tests.insert(id, test);
        self
    }

    /// Get a test by ID.
    pub fn get_test(&self, id: i64) -> Option<&BgpTest> {
        self.tests.get(&id)
    }

    /// Store a new test, assigning the server-side fields.
    ///
    /// Returns the stored version, as the create endpoint echoes it.
    pub fn create_test(&mut self, mut test: BgpTest) -> &BgpTest {
        let id = self.next_id;
        self.next_id += 1;

        test.test_id = Some(id);
        test.test_type = Some("bgp".to_string());
        if test.created_date.is_none() {
            test.created_date = Some("2024-01-01 00:00:00".to_string());
        }

        self.tests.entry(id).or_insert(test)
    }

    /// Apply a partial update: fields set on `changes` replace the stored
    /// values, unset fields are left untouched. Returns the updated test.
    pub fn update_test(&mut self, id: i64, changes: &BgpTest) -> Option<&BgpTest> {
        let current = self.tests.get_mut(&id)?;

        let mut base = serde_json::to_value(&*current).ok()?;
        let patch = serde_json::to_value(changes).ok()?;
        if let (Some(base_map), serde_json::Value::Object(patch_map)) =
            (base.as_object_mut(), patch)
        {
            for (key, value) in patch_map {
                base_map.insert(key, value);
            }
        }

        *current = serde_json::from_value(base).ok()?;
        current.modified_date = Some("2024-01-02 00:00:00".to_string());
        self.tests.get(&id)
    }

    /// Remove a test. Returns whether it existed.
    pub fn delete_test(&mut self, id: i64) -> bool {
        self.tests.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    #[test]
    fn test_state_add_and_get_test() {
        let state = MockState::new().with_test(Fixtures::minimal_bgp(101, "Backbone watch"));

        let test = state.get_test(101);
        assert!(test.is_some());
        assert_eq!(test.unwrap().test_name.as_deref(), Some("Backbone watch"));
    }

    #[test]
    fn test_state_create_assigns_increasing_ids() {
        let mut state = MockState::new().with_test(Fixtures::minimal_bgp(101, "seed"));

        let created = state.create_test(BgpTest::new("new", "192.0.2.0/24")).clone();
        assert_eq!(created.test_id, Some(102));
        assert_eq!(created.test_type.as_deref(), Some("bgp"));
        assert!(state.get_test(102).is_some());
    }

    #[test]
    fn test_state_update_merges_only_set_fields() {
        let mut state = MockState::new().with_test(Fixtures::monitored_bgp(
            7,
            "Edge prefix",
            "198.51.100.0/24",
        ));

        let changes = BgpTest {
            description: Some("updated".to_string()),
            enabled: Some(false),
            ..BgpTest::default()
        };
        let updated = state.update_test(7, &changes).unwrap();

        assert_eq!(updated.description.as_deref(), Some("updated"));
        assert_eq!(updated.enabled, Some(false));
        // Untouched fields survive the merge
        assert_eq!(updated.prefix.as_deref(), Some("198.51.100.0/24"));
        assert!(updated.bgp_monitors.is_some());
    }

    #[test]
    fn test_state_delete() {
        let mut state = MockState::new().with_test(Fixtures::minimal_bgp(5, "gone soon"));

        assert!(state.delete_test(5));
        assert!(!state.delete_test(5));
        assert!(state.get_test(5).is_none());
    }
}
