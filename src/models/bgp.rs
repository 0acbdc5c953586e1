//! BGP trace test model and trait implementations.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, BoolFromInt};

use crate::client::ThousandEyesClient;
use crate::error::{Result, ThousandEyesError};
use crate::models::common::{AlertRule, ApiLink, GroupLabel, SharedWithAccount};
use crate::models::TestEnvelope;
use crate::traits::{Create, Delete, Get, Update};

/// A BGP trace test.
///
/// Monitors routing to a target prefix from a set of BGP monitors.
/// Every field is optional in both directions: unset fields are omitted
/// from request bodies, and fields absent from a response stay `None`
/// rather than defaulting.
///
/// The API transmits several logically-boolean fields as integers
/// restricted to `0`/`1` (`alertsEnabled`, `enabled`, `savedEvent`,
/// `liveShare`, `includeCoveredPrefixes`, `usePublicBgp`). Those fields
/// are declared with a strict int-to-bool adapter: they serialize as
/// `0`/`1` and any other wire value fails decoding.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BgpTest {
    // Common test fields
    /// Whether alerting is enabled for this test.
    #[serde_as(as = "Option<BoolFromInt>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts_enabled: Option<bool>,

    /// Alert rules attached to this test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_rules: Option<Vec<AlertRule>>,

    /// Hypermedia links for this test (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_links: Option<Vec<ApiLink>>,

    /// Email of the user who created the test (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation timestamp, UTC (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the test is running.
    #[serde_as(as = "Option<BoolFromInt>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Labels this test belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupLabel>>,

    /// Email of the user who last modified the test (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,

    /// Last-modification timestamp, UTC (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,

    /// Whether the test is a saved event.
    #[serde_as(as = "Option<BoolFromInt>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_event: Option<bool>,

    /// Account groups this test is shared with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_with_accounts: Option<Vec<SharedWithAccount>>,

    /// Unique test ID (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<i64>,

    /// Test name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_name: Option<String>,

    /// Test type (always "bgp" for this model).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub test_type: Option<String>,

    /// Whether the test is shared via live share.
    #[serde_as(as = "Option<BoolFromInt>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_share: Option<bool>,

    // Fields unique to BGP tests
    /// BGP monitors assigned to the test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_monitors: Option<Vec<BgpMonitor>>,

    /// Whether to include queries for subprefixes of the target prefix.
    #[serde_as(as = "Option<BoolFromInt>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_covered_prefixes: Option<bool>,

    /// Target prefix in CIDR notation (e.g., `192.0.2.0/24`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Whether to use public BGP monitors rather than private ones.
    #[serde_as(as = "Option<BoolFromInt>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_public_bgp: Option<bool>,
}

/// A BGP monitor assigned to a test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BgpMonitor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// Monitor type ("Public" or "Private").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<String>,
}

impl BgpTest {
    /// Create a test definition for the given name and target prefix.
    pub fn new(test_name: &str, prefix: &str) -> Self {
        Self {
            test_name: Some(test_name.to_string()),
            test_type: Some("bgp".to_string()),
            prefix: Some(prefix.to_string()),
            ..Self::default()
        }
    }

    /// Whether the test is enabled (false when unset).
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Attach an existing alert rule to this test by ID.
    ///
    /// Initializes the alert-rule list if it has not been set.
    pub fn add_alert_rule(&mut self, rule_id: i64) {
        self.alert_rules
            .get_or_insert_with(Vec::new)
            .push(AlertRule::from_id(rule_id));
    }
}

#[async_trait]
impl Get for BgpTest {
    type Id = i64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &ThousandEyesClient, id: i64) -> Result<Self> {
        let response = client.get(&format!("tests/{id}")).await?;
        let response = ThousandEyesClient::expect_status(response, StatusCode::OK).await?;

        let body = response.bytes().await.map_err(ThousandEyesError::Transport)?;
        let envelope: TestEnvelope<BgpTest> = serde_json::from_slice(&body)?;
        envelope.into_single()
    }
}

#[async_trait]
impl Create for BgpTest {
    #[tracing::instrument(skip(client, test))]
    async fn create(client: &ThousandEyesClient, test: &Self) -> Result<Self> {
        let response = client.post("tests/bgp/new", test).await?;
        let response = ThousandEyesClient::expect_status(response, StatusCode::CREATED).await?;

        let body = response.bytes().await.map_err(ThousandEyesError::Transport)?;
        let envelope: TestEnvelope<BgpTest> = serde_json::from_slice(&body)?;
        envelope.into_single()
    }
}

#[async_trait]
impl Update for BgpTest {
    type Id = i64;

    #[tracing::instrument(skip(client, test))]
    async fn update(client: &ThousandEyesClient, id: i64, test: &Self) -> Result<Self> {
        let response = client.post(&format!("tests/bgp/{id}/update"), test).await?;
        let response = ThousandEyesClient::expect_status(response, StatusCode::OK).await?;

        let body = response.bytes().await.map_err(ThousandEyesError::Transport)?;
        let envelope: TestEnvelope<BgpTest> = serde_json::from_slice(&body)?;
        envelope.into_single()
    }
}

#[async_trait]
impl Delete for BgpTest {
    type Id = i64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &ThousandEyesClient, id: i64) -> Result<()> {
        let response = client.post_empty(&format!("tests/bgp/{id}/delete")).await?;
        ThousandEyesClient::expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_boolean_one_decodes_to_true() {
        let test: BgpTest = serde_json::from_value(json!({"enabled": 1})).unwrap();
        assert_eq!(test.enabled, Some(true));
    }

    #[test]
    fn test_wire_boolean_zero_decodes_to_false() {
        let test: BgpTest = serde_json::from_value(json!({"enabled": 0})).unwrap();
        assert_eq!(test.enabled, Some(false));
    }

    #[test]
    fn test_wire_boolean_other_integers_are_rejected() {
        let result: serde_json::Result<BgpTest> = serde_json::from_value(json!({"enabled": 2}));
        assert!(result.is_err());
    }

    #[test]
    fn test_wire_boolean_literal_bool_is_rejected() {
        let result: serde_json::Result<BgpTest> =
            serde_json::from_value(json!({"savedEvent": true}));
        assert!(result.is_err());
    }

    #[test]
    fn test_wire_boolean_absent_stays_unset() {
        let test: BgpTest = serde_json::from_value(json!({"testName": "x"})).unwrap();
        assert_eq!(test.enabled, None);
        assert_eq!(test.alerts_enabled, None);
        assert!(!test.is_enabled());
    }

    #[test]
    fn test_wire_boolean_null_stays_unset() {
        let test: BgpTest = serde_json::from_value(json!({"liveShare": null})).unwrap();
        assert_eq!(test.live_share, None);
    }

    #[test]
    fn test_wire_booleans_encode_as_integers() {
        let test = BgpTest {
            enabled: Some(true),
            use_public_bgp: Some(false),
            ..BgpTest::default()
        };

        let value = serde_json::to_value(&test).unwrap();
        assert_eq!(value, json!({"enabled": 1, "usePublicBgp": 0}));
    }

    #[test]
    fn test_unset_fields_are_omitted_entirely() {
        let test = BgpTest {
            test_name: Some("prefix watch".to_string()),
            ..BgpTest::default()
        };

        let value = serde_json::to_value(&test).unwrap();
        assert_eq!(value, json!({"testName": "prefix watch"}));
    }

    #[test]
    fn test_decode_encode_round_trip_preserves_payload() {
        let payload = json!({
            "alertsEnabled": 1,
            "alertRules": [{"ruleId": 9, "ruleName": "Default BGP Alert"}],
            "apiLinks": [{"href": "https://api.thousandeyes.com/v6/tests/817", "rel": "self"}],
            "createdBy": "noc@example.com",
            "createdDate": "2020-02-06 15:30:00",
            "enabled": 1,
            "savedEvent": 0,
            "sharedWithAccounts": [{"aid": 210, "name": "Network Ops"}],
            "testId": 817,
            "testName": "AS-path watch",
            "type": "bgp",
            "liveShare": 0,
            "bgpMonitors": [
                {"monitorId": 64, "monitorName": "Amsterdam-1", "monitorType": "Public"}
            ],
            "includeCoveredPrefixes": 1,
            "prefix": "192.0.2.0/24",
            "usePublicBgp": 1
        });

        let test: BgpTest = serde_json::from_value(payload.clone()).unwrap();
        let encoded = serde_json::to_value(&test).unwrap();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn test_type_field_uses_wire_key() {
        let test = BgpTest::new("t", "198.51.100.0/24");
        let value = serde_json::to_value(&test).unwrap();
        assert_eq!(value.get("type"), Some(&json!("bgp")));
        assert!(value.get("testType").is_none());
    }

    #[test]
    fn test_add_alert_rule_appends_reference() {
        let mut test = BgpTest {
            alert_rules: Some(vec![]),
            ..BgpTest::default()
        };

        test.add_alert_rule(42);

        let rules = test.alert_rules.as_ref().unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule_id, Some(42));
    }

    #[test]
    fn test_add_alert_rule_initializes_missing_list() {
        let mut test = BgpTest::default();

        test.add_alert_rule(7);
        test.add_alert_rule(8);

        let rules = test.alert_rules.as_ref().unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].rule_id, Some(8));
    }
}
