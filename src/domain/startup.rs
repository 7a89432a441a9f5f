//! Startup and team-membership records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Keyed;
use super::user::User;

/// Membership role given to the resolved team leader.
pub const TEAM_LEADER_ROLE: &str = "Team Leader";
/// Membership role given to everyone else on the team.
pub const TEAM_MEMBER_ROLE: &str = "Team Member";

/// Lifecycle status of a startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupStatus {
    Pending,
    Approved,
    Rejected,
}

impl StartupStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for StartupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A startup record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Startup {
    /// Unique identifier.
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: StartupStatus,
    /// Owning user, when the backend assigns one directly.
    #[serde(default)]
    pub user: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    /// Team roster, when the detail endpoint expands it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<TeamMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_leader: Option<User>,
}

impl Keyed for Startup {
    fn key(&self) -> i64 {
        self.id
    }
}

/// A team-membership record linking a user to a startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: i64,
    pub role_in_team: String,
    /// Startup this membership belongs to.
    pub startup: i64,
    /// Member's user id.
    pub user: i64,
    /// Expanded user record, when the endpoint provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_details: Option<User>,
}

impl Keyed for TeamMember {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Payload for creating a startup record.
#[derive(Debug, Clone, Serialize)]
pub struct NewStartup {
    pub name: String,
    pub description: String,
    pub industry: String,
    pub stage: String,
    pub status: StartupStatus,
    /// Always sent, `null` when no user owns the startup directly.
    pub user: Option<i64>,
}

/// Partial update payload for a startup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StartupPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StartupStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

/// Payload for adding a team member to a startup.
#[derive(Debug, Clone, Serialize)]
pub struct NewTeamMember {
    pub user: i64,
    pub role_in_team: String,
    pub startup: i64,
}

/// Input to the create-startup-with-team workflow.
///
/// Leader and members are referred to by display name and resolved against
/// the user directory by exact `full_name` match. The initial status is a
/// product decision the caller must make explicitly; the backend does not
/// default it.
#[derive(Debug, Clone)]
pub struct TeamPlan {
    pub name: String,
    pub description: String,
    pub industry: String,
    pub stage: String,
    pub initial_status: StartupStatus,
    /// Display name of the team leader.
    pub team_leader: String,
    /// Display names of the remaining members. Duplicates and the leader's
    /// own name are dropped before any membership is created.
    pub team_members: Vec<String>,
}
