//! Persisted client session state.
//!
//! This replaces the browser's ad-hoc local-storage surface (tokens, the
//! signed-in user, per-application evaluation scores) with one explicit
//! store: a defined read/write/clear lifecycle, a versioned snapshot
//! schema, and a single JSON file on disk.
//!
//! Evaluation scores live only here. They are never sent to the backend,
//! so they do not follow the reviewer across machines. Concurrent
//! processes writing the same session file are last-write-wins; there is
//! no conflict detection.
//!
//! # Example
//!
//! ```rust
//! use incubator_client::session::SessionStore;
//! use incubator_client::domain::EvaluationScore;
//!
//! let session = SessionStore::new();
//! session.set_score(42, EvaluationScore::new(6, 5, 4));
//! assert_eq!(session.score(42).unwrap().total(), 15);
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::score::EvaluationScore;
use crate::domain::user::User;
use crate::error::Result;

/// Snapshot schema version. Snapshots carrying any other version are
/// discarded on load instead of migrated.
pub const SCHEMA_VERSION: u32 = 1;

/// Access/refresh token pair handed out by the backend's login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Serializable snapshot of a session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionState {
    pub version: u32,
    pub tokens: Option<AuthTokens>,
    pub user: Option<User>,
    /// Evaluation scores keyed by application id.
    #[serde(default)]
    pub form_scores: HashMap<i64, EvaluationScore>,
}

/// Thread-safe client session store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

#[derive(Debug, Default)]
struct SessionInner {
    tokens: RwLock<Option<AuthTokens>>,
    user: RwLock<Option<User>>,
    form_scores: RwLock<HashMap<i64, EvaluationScore>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SessionInner::default()),
        }
    }

    /// Store the token pair from a successful login.
    pub fn set_tokens(&self, access: impl Into<String>, refresh: Option<String>) {
        *self.inner.tokens.write().unwrap() = Some(AuthTokens {
            access: access.into(),
            refresh,
        });
    }

    /// The current access token, if signed in.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .tokens
            .read()
            .unwrap()
            .as_ref()
            .map(|t| t.access.clone())
    }

    /// The current refresh token, if one was issued.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.inner
            .tokens
            .read()
            .unwrap()
            .as_ref()
            .and_then(|t| t.refresh.clone())
    }

    /// Store the signed-in user record.
    pub fn set_current_user(&self, user: User) {
        *self.inner.user.write().unwrap() = Some(user);
    }

    /// The signed-in user record, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.inner.user.read().unwrap().clone()
    }

    /// Save a reviewer's score sheet for one application.
    pub fn set_score(&self, application_id: i64, score: EvaluationScore) {
        self.inner
            .form_scores
            .write()
            .unwrap()
            .insert(application_id, score);
    }

    /// The saved score sheet for an application, if any.
    #[must_use]
    pub fn score(&self, application_id: i64) -> Option<EvaluationScore> {
        self.inner
            .form_scores
            .read()
            .unwrap()
            .get(&application_id)
            .copied()
    }

    /// Remove the score sheet for one application.
    pub fn remove_score(&self, application_id: i64) -> Option<EvaluationScore> {
        self.inner.form_scores.write().unwrap().remove(&application_id)
    }

    /// All saved score sheets keyed by application id.
    #[must_use]
    pub fn scores(&self) -> HashMap<i64, EvaluationScore> {
        self.inner.form_scores.read().unwrap().clone()
    }

    /// Sign-out lifecycle: drop tokens, user, and scores.
    pub fn clear(&self) {
        *self.inner.tokens.write().unwrap() = None;
        *self.inner.user.write().unwrap() = None;
        self.inner.form_scores.write().unwrap().clear();
    }

    /// Snapshot the session for persistence.
    #[must_use]
    pub fn to_state(&self) -> SessionState {
        SessionState {
            version: SCHEMA_VERSION,
            tokens: self.inner.tokens.read().unwrap().clone(),
            user: self.inner.user.read().unwrap().clone(),
            form_scores: self.inner.form_scores.read().unwrap().clone(),
        }
    }

    /// Rebuild a session from a snapshot.
    #[must_use]
    pub fn from_state(state: SessionState) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                tokens: RwLock::new(state.tokens),
                user: RwLock::new(state.user),
                form_scores: RwLock::new(state.form_scores),
            }),
        }
    }

    /// Write the session snapshot to `path` as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.to_state())?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a session snapshot from `path`.
    ///
    /// A missing file or an unknown schema version yields a fresh, empty
    /// session; a present-but-corrupt file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        let json = std::fs::read_to_string(path)?;
        let state: SessionState = serde_json::from_str(&json)?;
        if state.version != SCHEMA_VERSION {
            warn!(
                name: "session.version_mismatch",
                found = state.version,
                expected = SCHEMA_VERSION,
                "discarding session snapshot with unknown schema version"
            );
            return Ok(Self::new());
        }
        Ok(Self::from_state(state))
    }
}
