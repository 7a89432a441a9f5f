//! Entity records mirrored from the backend wire format.
//!
//! These types are plain serde mirrors of what the REST API sends and
//! accepts. The backend owns persistence and validation; nothing here is
//! enforced beyond shape, with one exception: [`score::EvaluationScore`]
//! never touches the backend at all and lives only in the local session.

pub mod analytics;
pub mod application;
pub mod event;
pub mod resource;
pub mod score;
pub mod stage;
pub mod startup;
pub mod user;

pub use analytics::{
    AcceptanceRate, DashboardStats, ResourceUtilization, StatusCount, SurvivalRate,
};
pub use application::{ApplicationStatus, IncubationForm, IncubationFormPatch};
pub use event::{Event, EventPatch, NewEvent};
pub use resource::{
    NewResource, NewResourceRequest, RequestStatus, Resource, ResourcePatch, ResourceRequest,
    ResourceRequestPatch,
};
pub use score::EvaluationScore;
pub use stage::{
    Deliverable, DeliverablePatch, DeliverableStatus, NewDeliverable, NewStage, Stage, StagePatch,
};
pub use startup::{
    NewStartup, NewTeamMember, Startup, StartupPatch, StartupStatus, TeamMember, TeamPlan,
};
pub use user::{NewUser, Role, User, UserPatch};

/// Records addressable by their backend-assigned id.
///
/// Implemented by every entity the state stores reconcile by id.
pub trait Keyed {
    /// The backend-assigned identifier.
    fn key(&self) -> i64;
}
