//! Incubation application (form) records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Keyed;

/// Review status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    InProgress,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An incubation application as submitted through the intake form.
///
/// The team-leader contact block and the project fields travel together;
/// team members arrive as one free-text field, not as user references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncubationForm {
    pub id: i64,
    pub project_id: String,
    pub team_leader_name: String,
    pub team_leader_year: String,
    pub team_leader_email: String,
    pub team_leader_phone: String,
    pub team_members: String,
    pub project_title: String,
    pub project_domain: String,
    pub is_ai_project: bool,
    pub project_summary: String,
    pub dev_stage: String,
    pub demo_link: String,
    pub project_video: String,
    pub key_milestones: String,
    pub current_challenges: String,
    pub problem_statement: String,
    pub target_audience: String,
    pub expected_impact: String,
    pub additional_motivation: String,
    #[serde(default)]
    pub supporting_documents: Option<String>,
    pub confirmation: bool,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for IncubationForm {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Partial update payload for an application.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IncubationFormPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_milestones: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_challenges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
}
