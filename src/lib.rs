//! Incubator Client
//!
//! Async client SDK and client-side state layer for the university
//! startup-incubator REST backend: typed per-entity services over one
//! configured HTTP client, a multi-step create-startup-with-team workflow,
//! per-entity stores with `{items, loading, error}` reconciliation, a
//! persisted session, and CSV export.
//!
//! # Architecture
//!
//! - **Client**: one [`ApiClient`] wrapping the base URL, JSON headers,
//!   bearer auth, and error normalization
//! - **Services**: per-entity accessors (`client.startups()`, ...) mapping
//!   REST endpoints to typed calls
//! - **Stores**: in-memory collections that reconcile service results
//!   (append / replace-by-id / filter-out) and guard against stale fetches
//! - **Session**: versioned on-disk replacement for the browser's ad-hoc
//!   local storage
//!
//! # Modules
//!
//! - [`client`]: HTTP client wrapper
//! - [`api`]: per-entity REST services
//! - [`domain`]: wire-shape entity records
//! - [`store`]: client-side state stores
//! - [`session`]: persisted session state
//! - [`export`]: CSV export
//! - [`config`]: configuration loading

pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod session;
pub mod store;

// Re-exports
pub use client::ApiClient;
pub use config::{ClientConfig, ConfigArgs};
pub use error::{Error, Result};
pub use session::SessionStore;
