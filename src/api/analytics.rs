//! Analytics API.

use crate::client::ApiClient;
use crate::domain::analytics::{
    AcceptanceRate, DashboardStats, ResourceUtilization, StatusCount, SurvivalRate,
};
use crate::error::Result;

/// Analytics API client.
#[derive(Debug)]
pub struct AnalyticsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl AnalyticsApi<'_> {
    /// Dashboard summary counters.
    pub async fn dashboard(&self) -> Result<DashboardStats> {
        self.client.get("/analytics/dashboard/").await
    }

    /// Startup count per status.
    pub async fn startup_status(&self) -> Result<Vec<StatusCount>> {
        self.client.get("/analytics/startup-status/").await
    }

    /// Application count per status.
    pub async fn application_status(&self) -> Result<Vec<StatusCount>> {
        self.client.get("/analytics/application-status/").await
    }

    /// Per-resource utilization figures.
    pub async fn resource_utilization(&self) -> Result<Vec<ResourceUtilization>> {
        self.client.get("/analytics/resource-utilization/").await
    }

    /// Application acceptance rate for the current period.
    pub async fn acceptance_rate(&self) -> Result<AcceptanceRate> {
        self.client.get("/analytics/acceptance-rate/").await
    }

    /// Startup survival rate for the current period.
    pub async fn survival_rate(&self) -> Result<SurvivalRate> {
        self.client.get("/analytics/survival-rate/").await
    }
}
