//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{AlertRule, ApiLink, BgpMonitor, BgpTest, SharedWithAccount};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a minimal BGP test with identity fields only.
    pub fn minimal_bgp(id: i64, name: &str) -> BgpTest {
        BgpTest {
            test_id: Some(id),
            test_name: Some(name.to_string()),
            test_type: Some("bgp".to_string()),
            ..BgpTest::default()
        }
    }

    /// Create an enabled BGP test with monitors, an alert rule, and the
    /// audit fields a live API response carries.
    pub fn monitored_bgp(id: i64, name: &str, prefix: &str) -> BgpTest {
        BgpTest {
            alerts_enabled: Some(true),
            alert_rules: Some(vec![AlertRule {
                rule_id: Some(9),
                rule_name: Some("Default BGP Alert Rule".to_string()),
                ..AlertRule::default()
            }]),
            api_links: Some(vec![ApiLink {
                href: Some(format!("https://api.thousandeyes.com/v6/tests/{id}")),
                rel: Some("self".to_string()),
            }]),
            created_by: Some("noc@example.com".to_string()),
            created_date: Some("2023-06-01 09:15:00".to_string()),
            enabled: Some(true),
            saved_event: Some(false),
            shared_with_accounts: Some(vec![SharedWithAccount {
                aid: Some(210),
                name: Some("Network Ops".to_string()),
            }]),
            live_share: Some(false),
            bgp_monitors: Some(vec![
                BgpMonitor {
                    monitor_id: Some(64),
                    monitor_name: Some("Amsterdam-1".to_string()),
                    ip_address: Some("203.0.113.7".to_string()),
                    country_id: Some("NL".to_string()),
                    network: Some("AS 64500".to_string()),
                    monitor_type: Some("Public".to_string()),
                },
                BgpMonitor {
                    monitor_id: Some(71),
                    monitor_name: Some("Chicago-2".to_string()),
                    monitor_type: Some("Public".to_string()),
                    ..BgpMonitor::default()
                },
            ]),
            include_covered_prefixes: Some(false),
            prefix: Some(prefix.to_string()),
            use_public_bgp: Some(true),
            ..Self::minimal_bgp(id, name)
        }
    }

    /// The tests seeded into a default mock server.
    pub fn default_scenario() -> Vec<BgpTest> {
        vec![
            Self::monitored_bgp(101, "Backbone prefix watch", "192.0.2.0/24"),
            Self::minimal_bgp(102, "Staging prefix watch"),
        ]
    }
}
