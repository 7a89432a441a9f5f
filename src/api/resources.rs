//! Resources and resource-requests API.

use crate::client::ApiClient;
use crate::domain::resource::{
    NewResource, NewResourceRequest, Resource, ResourcePatch, ResourceRequest,
    ResourceRequestPatch,
};
use crate::error::Result;

/// Resources API client.
#[derive(Debug)]
pub struct ResourcesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ResourcesApi<'_> {
    /// List all resources.
    pub async fn list(&self) -> Result<Vec<Resource>> {
        self.client.get("/resources/").await
    }

    /// Get a resource by id.
    pub async fn get(&self, id: i64) -> Result<Resource> {
        self.client.get(&format!("/resources/{id}/")).await
    }

    /// Create a resource.
    pub async fn create(&self, resource: &NewResource) -> Result<Resource> {
        self.client.post("/resources/", resource).await
    }

    /// Update a resource.
    pub async fn update(&self, id: i64, patch: &ResourcePatch) -> Result<Resource> {
        self.client.put(&format!("/resources/{id}/"), patch).await
    }

    /// Delete a resource.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/resources/{id}/")).await
    }

    /// List all resource requests.
    pub async fn requests(&self) -> Result<Vec<ResourceRequest>> {
        self.client.get("/resource-requests/").await
    }

    /// Get a resource request by id.
    pub async fn request(&self, id: i64) -> Result<ResourceRequest> {
        self.client.get(&format!("/resource-requests/{id}/")).await
    }

    /// Create a resource request.
    pub async fn create_request(&self, request: &NewResourceRequest) -> Result<ResourceRequest> {
        self.client.post("/resource-requests/", request).await
    }

    /// Update a resource request.
    pub async fn update_request(
        &self,
        id: i64,
        patch: &ResourceRequestPatch,
    ) -> Result<ResourceRequest> {
        self.client
            .put(&format!("/resource-requests/{id}/"), patch)
            .await
    }

    /// Delete a resource request.
    pub async fn delete_request(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/resource-requests/{id}/")).await
    }

    /// Approve a pending resource request.
    pub async fn approve_request(&self, id: i64) -> Result<ResourceRequest> {
        self.client
            .put(&format!("/resource-requests/{id}/approve/"), &serde_json::json!({}))
            .await
    }

    /// Reject a pending resource request.
    pub async fn reject_request(&self, id: i64) -> Result<ResourceRequest> {
        self.client
            .put(&format!("/resource-requests/{id}/reject/"), &serde_json::json!({}))
            .await
    }
}
