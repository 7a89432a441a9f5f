//! Stage and deliverable stores.

use crate::client::ApiClient;
use crate::domain::stage::{
    Deliverable, DeliverablePatch, NewDeliverable, NewStage, Stage, StagePatch,
};
use crate::error::Result;

use super::collection::CollectionStore;

/// Client-side state for the incubation stage sequence.
#[derive(Debug, Clone)]
pub struct StageStore {
    client: ApiClient,
    state: CollectionStore<Stage>,
}

impl StageStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: CollectionStore::new(),
        }
    }

    pub async fn refresh(&self) -> Result<()> {
        let token = self.state.begin_fetch();
        match self.client.stages().list().await {
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

    pub async fn create(&self, stage: &NewStage) -> Result<Stage> {
        let created = self
            .state
            .track("stages.create", self.client.stages().create(stage))
            .await?;
        self.state.upsert(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: &StagePatch) -> Result<Stage> {
        let updated = self
            .state
            .track("stages.update", self.client.stages().update(id, patch))
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .track("stages.delete", self.client.stages().delete(id))
            .await?;
        self.state.remove(id);
        Ok(())
    }

    /// Stages ordered by their sequence position.
    #[must_use]
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages = self.state.items();
        stages.sort_by_key(|stage| stage.sequence_order);
        stages
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

/// Client-side state for one startup's deliverables (or all of them).
#[derive(Debug, Clone)]
pub struct DeliverableStore {
    client: ApiClient,
    /// When set, refreshes are scoped to this startup.
    startup: Option<i64>,
    state: CollectionStore<Deliverable>,
}

impl DeliverableStore {
    #[must_use]
    pub fn new(client: ApiClient, startup: Option<i64>) -> Self {
        Self {
            client,
            startup,
            state: CollectionStore::new(),
        }
    }

    pub async fn refresh(&self) -> Result<()> {
        let token = self.state.begin_fetch();
        match self.client.deliverables().list(self.startup).await {
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

    pub async fn create(&self, deliverable: &NewDeliverable) -> Result<Deliverable> {
        let created = self
            .state
            .track(
                "deliverables.create",
                self.client.deliverables().create(deliverable),
            )
            .await?;
        self.state.upsert(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: &DeliverablePatch) -> Result<Deliverable> {
        let updated = self
            .state
            .track(
                "deliverables.update",
                self.client.deliverables().update(id, patch),
            )
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    /// Submit a deliverable and replace it locally with the updated record.
    pub async fn submit(&self, id: i64, submission_url: impl Into<String>) -> Result<Deliverable> {
        let updated = self
            .state
            .track(
                "deliverables.submit",
                self.client.deliverables().submit(id, submission_url.into()),
            )
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .track("deliverables.delete", self.client.deliverables().delete(id))
            .await?;
        self.state.remove(id);
        Ok(())
    }

    #[must_use]
    pub fn deliverables(&self) -> Vec<Deliverable> {
        self.state.items()
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
