//! Incubation stage and deliverable records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Keyed;

/// One step in a startup's incubation sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: i64,
    pub name: String,
    /// Position in the ordered progression.
    pub sequence_order: i64,
    pub duration_months: i64,
}

impl Keyed for Stage {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Payload for creating a stage.
#[derive(Debug, Clone, Serialize)]
pub struct NewStage {
    pub name: String,
    pub sequence_order: i64,
    pub duration_months: i64,
}

/// Partial update payload for a stage.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<i64>,
}

/// Submission status of a deliverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableStatus {
    Pending,
    Submitted,
    Reviewed,
}

/// A deliverable a startup owes for a given stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub submission_url: Option<String>,
    pub status: DeliverableStatus,
    /// Stage this deliverable belongs to.
    pub stage: i64,
    /// Startup that owes it.
    pub startup: i64,
}

impl Keyed for Deliverable {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Payload for creating a deliverable.
#[derive(Debug, Clone, Serialize)]
pub struct NewDeliverable {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub stage: i64,
    pub startup: i64,
}

/// Partial update payload for a deliverable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeliverablePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliverableStatus>,
}
