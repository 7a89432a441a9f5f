//! Applications (incubation forms) API.

use serde::Serialize;

use crate::client::ApiClient;
use crate::domain::application::{ApplicationStatus, IncubationForm, IncubationFormPatch};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: ApplicationStatus,
}

/// Applications API client.
#[derive(Debug)]
pub struct ApplicationsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ApplicationsApi<'_> {
    /// List all applications.
    pub async fn list(&self) -> Result<Vec<IncubationForm>> {
        self.client.get("/incubation-form/").await
    }

    /// Get an application by id.
    pub async fn get(&self, id: i64) -> Result<IncubationForm> {
        self.client.get(&format!("/incubation-form/{id}/")).await
    }

    /// List applications still awaiting review.
    pub async fn pending(&self) -> Result<Vec<IncubationForm>> {
        self.client.get("/incubation-form/pending/").await
    }

    /// Update an application.
    pub async fn update(&self, id: i64, patch: &IncubationFormPatch) -> Result<IncubationForm> {
        self.client
            .put(&format!("/incubation-form/{id}/"), patch)
            .await
    }

    /// Move an application to a new review status.
    pub async fn set_status(&self, id: i64, status: ApplicationStatus) -> Result<IncubationForm> {
        self.client
            .put(&format!("/incubation-form/{id}/status/"), &StatusUpdate { status })
            .await
    }

    /// Delete an application.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/incubation-form/{id}/")).await
    }
}
