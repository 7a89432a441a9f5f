//! Startup collection store.

use crate::client::ApiClient;
use crate::domain::startup::{NewStartup, Startup, StartupPatch, TeamPlan};
use crate::error::Result;

use super::collection::CollectionStore;

/// Client-side state for the startups collection.
#[derive(Debug, Clone)]
pub struct StartupStore {
    client: ApiClient,
    state: CollectionStore<Startup>,
}

impl StartupStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: CollectionStore::new(),
        }
    }

    /// Re-fetch the full list. Completions of superseded fetches are
    /// discarded rather than applied out of order.
    pub async fn refresh(&self) -> Result<()> {
        let token = self.state.begin_fetch();
        match self.client.startups().list().await {
            Ok(items) => {
                self.state.complete_fetch(token, Ok(items));
                Ok(())
            }
            Err(err) => {
                self.state.complete_fetch(token, Err(err.to_string()));
                Err(err)
            }
        }
    }

    /// Create a startup and append it to local state.
    pub async fn create(&self, startup: &NewStartup) -> Result<Startup> {
        let created = self
            .state
            .track("startups.create", self.client.startups().create(startup))
            .await?;
        self.state.upsert(created.clone());
        Ok(created)
    }

    /// Run the create-with-team workflow and append the composed startup.
    pub async fn create_with_team(&self, plan: &TeamPlan) -> Result<Startup> {
        let created = self
            .state
            .track(
                "startups.create_with_team",
                self.client.startups().create_with_team(plan),
            )
            .await?;
        self.state.upsert(created.clone());
        Ok(created)
    }

    /// Update a startup and replace it in local state.
    pub async fn update(&self, id: i64, patch: &StartupPatch) -> Result<Startup> {
        let updated = self
            .state
            .track("startups.update", self.client.startups().update(id, patch))
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    /// Delete a startup and filter it out of local state.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .track("startups.delete", self.client.startups().delete(id))
            .await?;
        self.state.remove(id);
        Ok(())
    }

    /// Snapshot of the startups held locally.
    #[must_use]
    pub fn startups(&self) -> Vec<Startup> {
        self.state.items()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<Startup> {
        self.state.get(id)
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
