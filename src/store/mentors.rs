//! Mentor collection store.

use crate::client::ApiClient;
use crate::domain::user::{User, UserPatch};
use crate::error::Result;

use super::collection::CollectionStore;

/// Client-side state for mentor accounts.
#[derive(Debug, Clone)]
pub struct MentorStore {
    client: ApiClient,
    state: CollectionStore<User>,
}

impl MentorStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: CollectionStore::new(),
        }
    }

    pub async fn refresh(&self) -> Result<()> {
        let token = self.state.begin_fetch();
        match self.client.mentors().list().await {
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

    pub async fn create(
        &self,
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<User> {
        let created = self
            .state
            .track(
                "mentors.create",
                self.client.mentors().create(full_name, email, password),
            )
            .await?;
        self.state.upsert(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: &UserPatch) -> Result<User> {
        let updated = self
            .state
            .track("mentors.update", self.client.mentors().update(id, patch))
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .track("mentors.delete", self.client.mentors().delete(id))
            .await?;
        self.state.remove(id);
        Ok(())
    }

    #[must_use]
    pub fn mentors(&self) -> Vec<User> {
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
