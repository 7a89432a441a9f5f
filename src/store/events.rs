//! Event collection store.

use crate::client::ApiClient;
use crate::domain::event::{Event, EventPatch, NewEvent};
use crate::error::Result;

use super::collection::CollectionStore;

/// Client-side state for scheduled events.
#[derive(Debug, Clone)]
pub struct EventStore {
    client: ApiClient,
    state: CollectionStore<Event>,
}

impl EventStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: CollectionStore::new(),
        }
    }

    pub async fn refresh(&self) -> Result<()> {
        let token = self.state.begin_fetch();
        match self.client.events().list().await {
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

    pub async fn create(&self, event: &NewEvent) -> Result<Event> {
        let created = self
            .state
            .track("events.create", self.client.events().create(event))
            .await?;
        self.state.upsert(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: &EventPatch) -> Result<Event> {
        let updated = self
            .state
            .track("events.update", self.client.events().update(id, patch))
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .track("events.delete", self.client.events().delete(id))
            .await?;
        self.state.remove(id);
        Ok(())
    }

    #[must_use]
    pub fn events(&self) -> Vec<Event> {
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
