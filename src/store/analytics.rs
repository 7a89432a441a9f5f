//! Analytics dashboard store.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use futures::try_join;

use crate::client::ApiClient;
use crate::domain::analytics::{DashboardStats, ResourceUtilization, StatusCount};
use crate::error::Result;

/// Client-side state for the analytics dashboard.
///
/// Unlike the collection stores this holds single snapshots, but fetches
/// are generation-guarded the same way: a refresh superseded by a newer
/// one never writes its (stale) snapshot.
#[derive(Debug, Clone)]
pub struct AnalyticsStore {
    client: ApiClient,
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    dashboard: RwLock<Option<DashboardStats>>,
    startup_status: RwLock<Vec<StatusCount>>,
    application_status: RwLock<Vec<StatusCount>>,
    resource_utilization: RwLock<Vec<ResourceUtilization>>,
    error: RwLock<Option<String>>,
    loading: AtomicBool,
    generation: AtomicU64,
}

impl AnalyticsStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            inner: Arc::new(Inner::default()),
        }
    }

    /// Fetch all dashboard panels concurrently and swap them in together.
    pub async fn refresh(&self) -> Result<()> {
        self.inner.loading.store(true, Ordering::SeqCst);
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let analytics = self.client.analytics();
        let result = try_join!(
            analytics.dashboard(),
            analytics.startup_status(),
            analytics.application_status(),
            analytics.resource_utilization(),
        );

        if generation != self.inner.generation.load(Ordering::SeqCst) {
            return Ok(());
        }

        match result {
            Ok((dashboard, startup_status, application_status, resource_utilization)) => {
                *self.inner.dashboard.write().unwrap() = Some(dashboard);
                *self.inner.startup_status.write().unwrap() = startup_status;
                *self.inner.application_status.write().unwrap() = application_status;
                *self.inner.resource_utilization.write().unwrap() = resource_utilization;
                *self.inner.error.write().unwrap() = None;
                self.inner.loading.store(false, Ordering::SeqCst);
                Ok(())
            }
            Err(err) => {
                *self.inner.error.write().unwrap() = Some(err.to_string());
                self.inner.loading.store(false, Ordering::SeqCst);
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn dashboard(&self) -> Option<DashboardStats> {
        self.inner.dashboard.read().unwrap().clone()
    }

    #[must_use]
    pub fn startup_status(&self) -> Vec<StatusCount> {
        self.inner.startup_status.read().unwrap().clone()
    }

    #[must_use]
    pub fn application_status(&self) -> Vec<StatusCount> {
        self.inner.application_status.read().unwrap().clone()
    }

    #[must_use]
    pub fn resource_utilization(&self) -> Vec<ResourceUtilization> {
        self.inner.resource_utilization.read().unwrap().clone()
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.inner.error.read().unwrap().clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.loading.load(Ordering::SeqCst)
    }
}
