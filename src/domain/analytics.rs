//! Analytics DTOs served by the dashboard endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub active_startups: u64,
    pub pending_applications: u64,
    pub pending_forms: u64,
    pub mentors_count: u64,
    pub trainers_count: u64,
    pub upcoming_events: u64,
    pub events_this_week: u64,
}

/// One slice of a status breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUtilization {
    pub name: String,
    pub total: i64,
    pub used: i64,
    pub available: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceRate {
    pub rate: f64,
    pub period: String,
    pub accepted: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalRate {
    pub rate: f64,
    pub period: String,
    pub survived: u64,
    pub total: u64,
}
