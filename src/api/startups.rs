//! Startups API, including the create-with-team workflow.

use std::collections::HashSet;

use futures::future::try_join_all;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::domain::startup::{
    NewStartup, NewTeamMember, Startup, StartupPatch, TEAM_LEADER_ROLE, TEAM_MEMBER_ROLE,
    TeamMember, TeamPlan,
};
use crate::domain::user::User;
use crate::error::{Error, Result};

/// Startups API client.
#[derive(Debug)]
pub struct StartupsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl StartupsApi<'_> {
    /// List all startups.
    pub async fn list(&self) -> Result<Vec<Startup>> {
        self.client.get("/startups/").await
    }

    /// Get a startup by id.
    pub async fn get(&self, id: i64) -> Result<Startup> {
        self.client.get(&format!("/startups/{id}/")).await
    }

    /// Create a bare startup record.
    pub async fn create(&self, startup: &NewStartup) -> Result<Startup> {
        self.client.post("/startups/", startup).await
    }

    /// Update a startup.
    pub async fn update(&self, id: i64, patch: &StartupPatch) -> Result<Startup> {
        self.client.put(&format!("/startups/{id}/"), patch).await
    }

    /// Delete a startup.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/startups/{id}/")).await
    }

    /// List a startup's team members.
    pub async fn team_members(&self, startup_id: i64) -> Result<Vec<TeamMember>> {
        self.client.get(&format!("/startups/{startup_id}/team/")).await
    }

    /// Add a team member to a startup.
    pub async fn add_team_member(
        &self,
        startup_id: i64,
        member: &NewTeamMember,
    ) -> Result<TeamMember> {
        self.client
            .post(&format!("/startups/{startup_id}/team/"), member)
            .await
    }

    /// Remove a team member from a startup.
    pub async fn remove_team_member(&self, startup_id: i64, member_id: i64) -> Result<()> {
        self.client
            .delete(&format!("/startups/{startup_id}/team/{member_id}/"))
            .await
    }

    /// Create a startup and staff its team in one operation.
    ///
    /// Steps, each depending on the previous one succeeding:
    ///
    /// 1. Create the startup record with the plan's initial status.
    /// 2. Fetch the user directory and resolve the leader by exact
    ///    `full_name` match (first match wins on duplicate names).
    /// 3. Add the leader with the `"Team Leader"` role.
    /// 4. Resolve and add the remaining members concurrently, with the
    ///    `"Team Member"` role. Member names are deduplicated against the
    ///    leader and each other first. One failed member fails the batch.
    /// 5. Re-fetch and return the startup with its roster expanded.
    ///
    /// There is no rollback: if a later step fails, the startup record and
    /// any memberships already created remain on the backend. Callers that
    /// need atomicity must clean up via [`Self::delete`].
    pub async fn create_with_team(&self, plan: &TeamPlan) -> Result<Startup> {
        let startup = self
            .create(&NewStartup {
                name: plan.name.clone(),
                description: plan.description.clone(),
                industry: plan.industry.clone(),
                stage: plan.stage.clone(),
                status: plan.initial_status,
                user: None,
            })
            .await?;
        info!(name: "startup.created", id = startup.id, startup = %startup.name, "startup record created");

        let users = self.client.users().list(None).await?;
        if users.is_empty() {
            warn!(name: "startup.team.no_users", id = startup.id, "user directory is empty");
            return Err(Error::NoUsers);
        }

        let leader = find_by_name(&users, &plan.team_leader).ok_or_else(|| Error::UserNotFound {
            name: plan.team_leader.clone(),
        })?;

        self.add_team_member(
            startup.id,
            &NewTeamMember {
                user: leader.id,
                role_in_team: TEAM_LEADER_ROLE.to_string(),
                startup: startup.id,
            },
        )
        .await?;

        // Drop the leader's own name and any repeats, preserving order.
        let mut seen = HashSet::new();
        let members: Vec<&str> = plan
            .team_members
            .iter()
            .map(String::as_str)
            .filter(|name| *name != plan.team_leader && seen.insert(*name))
            .collect();

        let startup_id = startup.id;
        try_join_all(members.into_iter().map(|name| {
            let users = &users;
            async move {
                let member = find_by_name(users, name).ok_or_else(|| Error::UserNotFound {
                    name: name.to_string(),
                })?;
                self.add_team_member(
                    startup_id,
                    &NewTeamMember {
                        user: member.id,
                        role_in_team: TEAM_MEMBER_ROLE.to_string(),
                        startup: startup_id,
                    },
                )
                .await?;
                Ok::<(), Error>(())
            }
        }))
        .await?;

        info!(name: "startup.team.staffed", id = startup_id, "team staffed, re-fetching startup");
        self.get(startup_id).await
    }
}

/// Exact `full_name` match; first hit wins on duplicates.
fn find_by_name<'u>(users: &'u [User], name: &str) -> Option<&'u User> {
    users.iter().find(|user| user.full_name == name)
}
