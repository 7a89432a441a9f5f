//! Resource inventory and resource-request records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Keyed;

/// A resource in the incubator inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    /// Resource category, e.g. "lab" or "equipment".
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub quantity_available: i64,
    pub created_at: DateTime<Utc>,
}

impl Keyed for Resource {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Payload for creating a resource.
#[derive(Debug, Clone, Serialize)]
pub struct NewResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub quantity_available: i64,
}

/// Partial update payload for a resource.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourcePatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_available: Option<i64>,
}

/// Review status of a resource request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// A startup's request for some quantity of a resource.
///
/// The list endpoint expands the referenced resource, startup, and
/// requesting user inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRequest {
    pub id: i64,
    pub quantity_requested: i64,
    pub status: RequestStatus,
    pub requested_at: DateTime<Utc>,
    pub resource: ResourceRef,
    pub startup: StartupRef,
    pub user: RequesterRef,
}

impl Keyed for ResourceRequest {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Inline resource reference on a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub quantity_available: i64,
}

/// Inline startup reference on a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupRef {
    pub id: i64,
    pub name: String,
}

/// Inline requesting-user reference on a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequesterRef {
    pub id: i64,
    pub full_name: String,
}

/// Payload for creating a resource request.
#[derive(Debug, Clone, Serialize)]
pub struct NewResourceRequest {
    pub quantity_requested: i64,
    /// Resource id.
    pub resource: i64,
    /// Requesting startup id.
    pub startup: i64,
}

/// Partial update payload for a resource request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceRequestPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_requested: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
}
