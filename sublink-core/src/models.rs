use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;

/// Envelope code the server uses for a successful call.
pub const SUCCESS_CODE: &str = "00000";

/// Refresh period the server assigns when none is given.
pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 3600;

/// A remote node-list source. Field names match the server's JSON keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExternalSubscription {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Enabled")]
    pub enabled: bool,
    #[serde(rename = "UpdateInterval")]
    pub update_interval: u64,
    #[serde(rename = "LastUpdate", default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    #[serde(rename = "NodeCount", default, skip_serializing_if = "Option::is_none")]
    pub node_count: Option<u64>,
    #[serde(rename = "GroupName", default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "UserAgent", default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ExternalSubscription {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            url: url.into(),
            enabled: true,
            update_interval: DEFAULT_UPDATE_INTERVAL_SECS,
            last_update: None,
            node_count: None,
            group_name: None,
            user_agent: None,
        }
    }

    /// Parses `LastUpdate`. A subscription that was never fetched carries the
    /// zero timestamp (`0001-01-01T00:00:00Z`), which is reported as `None`.
    pub fn last_update_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_update.as_deref()?;
        let parsed = DateTime::parse_from_rfc3339(raw).ok()?.with_timezone(&Utc);
        if parsed.year() <= 1 {
            None
        } else {
            Some(parsed)
        }
    }
}

/// Group entry as returned by the group listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub id: u64,
    pub name: String,
    #[serde(rename = "nodeCount", default, skip_serializing_if = "Option::is_none")]
    pub node_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewGroup {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupRename {
    pub id: u64,
    pub name: String,
}

/// Moves a node into a group. Both sides are addressed by name, unlike the
/// other group operations which address the group by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeGroupAssignment {
    pub name: String,
    pub group: String,
}

/// Node record as served by the group listing. Fields this crate does not
/// model are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    #[serde(rename = "ID", default)]
    pub id: Option<u64>,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Link", default)]
    pub link: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `{code, msg, data}` wrapper around every server reply. Fields the server
/// left out stay out when the envelope is serialized again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    pub fn into_result(self) -> Result<Option<T>, ClientError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ClientError::Api {
                code: self.code,
                msg: self.msg,
            })
        }
    }
}
