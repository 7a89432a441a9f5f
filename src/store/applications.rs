//! Application (incubation form) collection store.

use crate::client::ApiClient;
use crate::domain::application::{ApplicationStatus, IncubationForm, IncubationFormPatch};
use crate::error::Result;

use super::collection::CollectionStore;

/// Client-side state for incubation applications.
#[derive(Debug, Clone)]
pub struct ApplicationStore {
    client: ApiClient,
    state: CollectionStore<IncubationForm>,
}

impl ApplicationStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: CollectionStore::new(),
        }
    }

    /// Re-fetch every application.
    pub async fn refresh(&self) -> Result<()> {
        let token = self.state.begin_fetch();
        match self.client.applications().list().await {
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

    /// Re-fetch only the applications awaiting review.
    pub async fn refresh_pending(&self) -> Result<()> {
        let token = self.state.begin_fetch();
        match self.client.applications().pending().await {
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

    pub async fn update(&self, id: i64, patch: &IncubationFormPatch) -> Result<IncubationForm> {
        let updated = self
            .state
            .track(
                "applications.update",
                self.client.applications().update(id, patch),
            )
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    /// Move an application through the review pipeline.
    pub async fn set_status(&self, id: i64, status: ApplicationStatus) -> Result<IncubationForm> {
        let updated = self
            .state
            .track(
                "applications.set_status",
                self.client.applications().set_status(id, status),
            )
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .track("applications.delete", self.client.applications().delete(id))
            .await?;
        self.state.remove(id);
        Ok(())
    }

    #[must_use]
    pub fn applications(&self) -> Vec<IncubationForm> {
        self.state.items()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<IncubationForm> {
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
