//! Queue manager models

use crate::pagination::{CollectionPage, PageLink};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A queue manager
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueManagerDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    pub version: Option<String>,
    pub status_uri: Option<String>,
    pub web_console_url: Option<String>,
    pub rest_api_endpoint_url: Option<String>,
    pub administrator_api_endpoint_url: Option<String>,
    pub connection_info_uri: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub upgrade_available: Option<bool>,
    pub available_upgrade_versions_uri: Option<String>,
    pub href: Option<String>,
}

/// One page of queue managers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueManagerDetailsCollection {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub first: Option<PageLink>,
    pub next: Option<PageLink>,
    pub previous: Option<PageLink>,
    #[serde(default)]
    pub queue_managers: Vec<QueueManagerDetails>,
}

impl CollectionPage for QueueManagerDetailsCollection {
    type Item = QueueManagerDetails;

    fn next(&self) -> Option<&PageLink> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<QueueManagerDetails> {
        self.queue_managers
    }

    fn offset(&self) -> Option<i64> {
        self.offset
    }

    fn limit(&self) -> Option<i64> {
        self.limit
    }

    fn first(&self) -> Option<&PageLink> {
        self.first.as_ref()
    }

    fn previous(&self) -> Option<&PageLink> {
        self.previous.as_ref()
    }
}

/// Handle on an asynchronous queue manager task (create, delete, upgrade)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueManagerTaskStatus {
    pub queue_manager_uri: Option<String>,
    pub queue_manager_status_uri: Option<String>,
    pub queue_manager_id: Option<String>,
}

/// Provisioning or runtime status of a queue manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueManagerStatus {
    pub status: Option<String>,
}

/// A version a queue manager can be upgraded to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueManagerVersionUpgrade {
    pub version: Option<String>,
    pub target_date: Option<String>,
}

/// Upgrade versions available for a queue manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueManagerVersionUpgrades {
    pub total_count: Option<i64>,
    #[serde(default)]
    pub versions: Vec<QueueManagerVersionUpgrade>,
}

/// Client channel definition table for connecting to a queue manager
///
/// The channel entries are kept as raw JSON, ready to be written out as a CCDT.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    #[serde(default)]
    pub channel: Vec<Value>,
}
