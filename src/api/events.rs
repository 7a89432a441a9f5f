//! Events API.

use crate::client::ApiClient;
use crate::domain::event::{Event, EventPatch, NewEvent};
use crate::error::Result;

/// Events API client.
#[derive(Debug)]
pub struct EventsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl EventsApi<'_> {
    /// List all events.
    pub async fn list(&self) -> Result<Vec<Event>> {
        self.client.get("/events/").await
    }

    /// Get an event by id.
    pub async fn get(&self, id: i64) -> Result<Event> {
        self.client.get(&format!("/events/{id}/")).await
    }

    /// Create an event.
    pub async fn create(&self, event: &NewEvent) -> Result<Event> {
        self.client.post("/events/", event).await
    }

    /// Update an event.
    pub async fn update(&self, id: i64, patch: &EventPatch) -> Result<Event> {
        self.client.put(&format!("/events/{id}/"), patch).await
    }

    /// Delete an event.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/events/{id}/")).await
    }
}
