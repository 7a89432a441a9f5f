//! Resource and resource-request stores.

use crate::client::ApiClient;
use crate::domain::resource::{
    NewResource, NewResourceRequest, Resource, ResourcePatch, ResourceRequest,
};
use crate::error::Result;

use super::collection::CollectionStore;

/// Client-side state for the resource inventory.
#[derive(Debug, Clone)]
pub struct ResourceStore {
    client: ApiClient,
    state: CollectionStore<Resource>,
}

impl ResourceStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: CollectionStore::new(),
        }
    }

    /// Re-fetch the full list; stale completions are discarded.
    pub async fn refresh(&self) -> Result<()> {
        let token = self.state.begin_fetch();
        match self.client.resources().list().await {
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

    pub async fn create(&self, resource: &NewResource) -> Result<Resource> {
        let created = self
            .state
            .track("resources.create", self.client.resources().create(resource))
            .await?;
        self.state.upsert(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: &ResourcePatch) -> Result<Resource> {
        let updated = self
            .state
            .track("resources.update", self.client.resources().update(id, patch))
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .track("resources.delete", self.client.resources().delete(id))
            .await?;
        self.state.remove(id);
        Ok(())
    }

    /// Snapshot of the resources held locally.
    #[must_use]
    pub fn resources(&self) -> Vec<Resource> {
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

/// Client-side state for resource requests.
#[derive(Debug, Clone)]
pub struct ResourceRequestStore {
    client: ApiClient,
    state: CollectionStore<ResourceRequest>,
}

impl ResourceRequestStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: CollectionStore::new(),
        }
    }

    pub async fn refresh(&self) -> Result<()> {
        let token = self.state.begin_fetch();
        match self.client.resources().requests().await {
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

    pub async fn create(&self, request: &NewResourceRequest) -> Result<ResourceRequest> {
        let created = self
            .state
            .track(
                "resource_requests.create",
                self.client.resources().create_request(request),
            )
            .await?;
        self.state.upsert(created.clone());
        Ok(created)
    }

    /// Approve a request and replace it locally with the updated record.
    pub async fn approve(&self, id: i64) -> Result<ResourceRequest> {
        let updated = self
            .state
            .track(
                "resource_requests.approve",
                self.client.resources().approve_request(id),
            )
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    /// Reject a request and replace it locally with the updated record.
    pub async fn reject(&self, id: i64) -> Result<ResourceRequest> {
        let updated = self
            .state
            .track(
                "resource_requests.reject",
                self.client.resources().reject_request(id),
            )
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .track(
                "resource_requests.delete",
                self.client.resources().delete_request(id),
            )
            .await?;
        self.state.remove(id);
        Ok(())
    }

    #[must_use]
    pub fn requests(&self) -> Vec<ResourceRequest> {
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
