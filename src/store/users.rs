//! User directory store.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::domain::user::{NewUser, Role, User, UserPatch};
use crate::error::Result;

use super::collection::CollectionStore;

/// Minimum spacing between directory refreshes.
const MIN_REFETCH_INTERVAL: Duration = Duration::from_secs(1);

/// Client-side state for the user directory and role list.
///
/// On top of the usual collection behavior this store rate-limits
/// refreshes: a refresh starting within one second of the previous one is
/// skipped outright. The directory backs name-search boxes that refetch on
/// every keystroke, and this keeps that traffic bounded. It is a blunt
/// rate limit, not a cache.
#[derive(Debug, Clone)]
pub struct UserStore {
    client: ApiClient,
    state: CollectionStore<User>,
    roles: Arc<Mutex<Vec<Role>>>,
    last_fetch: Arc<Mutex<Option<Instant>>>,
}

impl UserStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: CollectionStore::new(),
            roles: Arc::new(Mutex::new(Vec::new())),
            last_fetch: Arc::new(Mutex::new(None)),
        }
    }

    /// Re-fetch the directory, optionally filtered by exact `full_name`.
    ///
    /// Returns `Ok(false)` when the refresh was skipped because the
    /// previous one started less than a second ago.
    pub async fn refresh(&self, full_name: Option<&str>) -> Result<bool> {
        {
            let mut last = self.last_fetch.lock().unwrap();
            if let Some(started) = *last {
                if started.elapsed() < MIN_REFETCH_INTERVAL {
                    debug!(name: "store.users.refresh_skipped", "refresh within min interval, skipped");
                    return Ok(false);
                }
            }
            *last = Some(Instant::now());
        }

        let token = self.state.begin_fetch();
        match self.client.users().list(full_name).await {
            Ok(items) => {
                self.state.complete_fetch(token, Ok(items));
                Ok(true)
            }
            Err(err) => {
                self.state.complete_fetch(token, Err(err.to_string()));
                Err(err)
            }
        }
    }

    /// Re-fetch the role list. Failures here only log; the role list is
    /// decorative next to the directory itself.
    pub async fn refresh_roles(&self) {
        match self.client.users().roles().await {
            Ok(roles) => *self.roles.lock().unwrap() = roles,
            Err(err) => {
                warn!(name: "store.users.roles_failed", error = %err, "role refresh failed");
            }
        }
    }

    pub async fn create(&self, user: &NewUser) -> Result<User> {
        let created = self
            .state
            .track("users.create", self.client.users().create(user))
            .await?;
        self.state.upsert(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: &UserPatch) -> Result<User> {
        let updated = self
            .state
            .track("users.update", self.client.users().update(id, patch))
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .track("users.delete", self.client.users().delete(id))
            .await?;
        self.state.remove(id);
        Ok(())
    }

    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.state.items()
    }

    #[must_use]
    pub fn roles(&self) -> Vec<Role> {
        self.roles.lock().unwrap().clone()
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
