//! Stages and deliverables API.

use crate::client::ApiClient;
use crate::domain::stage::{
    Deliverable, DeliverablePatch, DeliverableStatus, NewDeliverable, NewStage, Stage, StagePatch,
};
use crate::error::Result;

/// Stages API client.
#[derive(Debug)]
pub struct StagesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl StagesApi<'_> {
    /// List all stages in sequence order.
    pub async fn list(&self) -> Result<Vec<Stage>> {
        self.client.get("/stages/").await
    }

    /// Get a stage by id.
    pub async fn get(&self, id: i64) -> Result<Stage> {
        self.client.get(&format!("/stages/{id}/")).await
    }

    /// Create a stage.
    pub async fn create(&self, stage: &NewStage) -> Result<Stage> {
        self.client.post("/stages/", stage).await
    }

    /// Update a stage.
    pub async fn update(&self, id: i64, patch: &StagePatch) -> Result<Stage> {
        self.client.put(&format!("/stages/{id}/"), patch).await
    }

    /// Delete a stage.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/stages/{id}/")).await
    }
}

/// Deliverables API client.
#[derive(Debug)]
pub struct DeliverablesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl DeliverablesApi<'_> {
    /// List deliverables, optionally scoped to one startup.
    pub async fn list(&self, startup: Option<i64>) -> Result<Vec<Deliverable>> {
        match startup {
            Some(id) => {
                self.client
                    .get_with_query("/deliverables/", &[("startup", id.to_string())])
                    .await
            }
            None => self.client.get("/deliverables/").await,
        }
    }

    /// Get a deliverable by id.
    pub async fn get(&self, id: i64) -> Result<Deliverable> {
        self.client.get(&format!("/deliverables/{id}/")).await
    }

    /// Create a deliverable.
    pub async fn create(&self, deliverable: &NewDeliverable) -> Result<Deliverable> {
        self.client.post("/deliverables/", deliverable).await
    }

    /// Update a deliverable.
    pub async fn update(&self, id: i64, patch: &DeliverablePatch) -> Result<Deliverable> {
        self.client.put(&format!("/deliverables/{id}/"), patch).await
    }

    /// Delete a deliverable.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/deliverables/{id}/")).await
    }

    /// Submit a deliverable: records the submission URL and flips the
    /// status to `submitted`.
    pub async fn submit(&self, id: i64, submission_url: impl Into<String>) -> Result<Deliverable> {
        let patch = DeliverablePatch {
            status: Some(DeliverableStatus::Submitted),
            submission_url: Some(submission_url.into()),
            ..DeliverablePatch::default()
        };
        self.update(id, &patch).await
    }
}
