//! Reference types shared by every ThousandEyes test type.
//!
//! These mirror sibling resources (alert rules, account groups, labels)
//! only as far as a test definition embeds them; managing those resources
//! is outside this crate.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, BoolFromInt};

/// A reference to an alert rule attached to a test.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRule {
    /// The alert rule ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<i64>,

    /// Human-readable rule name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,

    /// Alert condition expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Alert direction (e.g., "TO_TARGET").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    /// Whether a notification is sent when the alert clears.
    /// Transmitted as integer 0/1 on the wire.
    #[serde_as(as = "Option<BoolFromInt>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_on_clear: Option<bool>,
}

impl AlertRule {
    /// Create a reference to an existing alert rule by ID.
    pub fn from_id(rule_id: i64) -> Self {
        Self {
            rule_id: Some(rule_id),
            ..Self::default()
        }
    }
}

/// A hypermedia link returned alongside a test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

/// A label (group) a test belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Non-zero for built-in labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<i64>,
}

/// An account group a test is shared with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedWithAccount {
    /// The account group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aid: Option<i64>,

    /// The account group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
