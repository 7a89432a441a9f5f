//! Client-side state stores.
//!
//! Each store pairs an [`ApiClient`](crate::ApiClient) with an in-memory
//! collection cell holding `{items, loading, error}`. Mutators call the
//! corresponding service, then reconcile local state: create appends,
//! update replaces by id, delete filters out. Failures land a
//! human-readable message in the error slot and still propagate to the
//! caller, so a failed widget degrades without taking anything else down.
//!
//! # Architecture
//!
//! - [`CollectionStore`]: the generic cell with generation-guarded fetches
//! - One store per entity, mirroring the backend collections
//! - [`UserStore`]: adds a minimum refetch interval on top
//!
//! # Example
//!
//! ```rust,no_run
//! use incubator_client::{ApiClient, store::ResourceStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("http://localhost:8000")?;
//! let resources = ResourceStore::new(client);
//! resources.refresh().await?;
//! println!("{} resources", resources.resources().len());
//! # Ok(())
//! # }
//! ```

mod analytics;
mod applications;
mod collection;
mod events;
mod mentors;
mod resources;
mod stages;
mod startups;
mod trainers;
mod users;

pub use analytics::AnalyticsStore;
pub use applications::ApplicationStore;
pub use collection::{CollectionStore, FetchToken};
pub use events::EventStore;
pub use mentors::MentorStore;
pub use resources::{ResourceRequestStore, ResourceStore};
pub use stages::{DeliverableStore, StageStore};
pub use startups::StartupStore;
pub use trainers::TrainerStore;
pub use users::UserStore;
