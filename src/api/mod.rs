//! Per-entity REST services.
//!
//! Each API struct borrows the [`ApiClient`](crate::ApiClient) and wraps the
//! endpoints for one entity: `list`/`get`/`create`/`update`/`delete` plus
//! entity-specific actions. Methods return the parsed response body (or `()`
//! for deletes) or an error; there are no retries and no caching — the
//! backend validates payloads.
//!
//! The one multi-request operation is
//! [`StartupsApi::create_with_team`](startups::StartupsApi::create_with_team).

mod analytics;
mod applications;
mod events;
mod mentors;
mod resources;
mod stages;
mod startups;
mod trainers;
mod users;

pub use analytics::AnalyticsApi;
pub use applications::ApplicationsApi;
pub use events::EventsApi;
pub use mentors::MentorsApi;
pub use resources::ResourcesApi;
pub use stages::{DeliverablesApi, StagesApi};
pub use startups::StartupsApi;
pub use trainers::TrainersApi;
pub use users::UsersApi;
