//! HTTP client for the incubator backend.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::api::{
    AnalyticsApi, ApplicationsApi, DeliverablesApi, EventsApi, MentorsApi, ResourcesApi,
    StagesApi, StartupsApi, TrainersApi, UsersApi,
};
use crate::config::ClientConfig;
use crate::error::{Error, Result, api_message};

/// HTTP client for the incubator REST API.
///
/// Cheaply clonable; clones share the underlying connection pool and the
/// bearer-token slot.
///
/// # Example
///
/// ```rust,no_run
/// use incubator_client::ApiClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new("http://localhost:8000")?;
///
/// let startups = client.startups().list().await?;
/// let resources = client.resources().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    base_url: Url,
    http: reqwest::Client,
    /// Bearer token attached to every request while set.
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the backend (e.g., "http://localhost:8000")
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a new client with a custom reqwest client.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                base_url,
                http,
                token: RwLock::new(None),
            }),
        })
    }

    /// Create a client from loaded configuration (applies the request timeout).
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()?;
        Self::with_client(&config.api.base_url, http)
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Attach a bearer token to all subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.inner.token.write().unwrap() = Some(token.into());
    }

    /// Stop sending an Authorization header.
    pub fn clear_token(&self) {
        *self.inner.token.write().unwrap() = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the Startups API.
    pub fn startups(&self) -> StartupsApi<'_> {
        StartupsApi { client: self }
    }

    /// Access the Users API.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }

    /// Access the Mentors API.
    pub fn mentors(&self) -> MentorsApi<'_> {
        MentorsApi { client: self }
    }

    /// Access the Trainers API.
    pub fn trainers(&self) -> TrainersApi<'_> {
        TrainersApi { client: self }
    }

    /// Access the Resources API.
    pub fn resources(&self) -> ResourcesApi<'_> {
        ResourcesApi { client: self }
    }

    /// Access the Events API.
    pub fn events(&self) -> EventsApi<'_> {
        EventsApi { client: self }
    }

    /// Access the Applications (incubation forms) API.
    pub fn applications(&self) -> ApplicationsApi<'_> {
        ApplicationsApi { client: self }
    }

    /// Access the Stages API.
    pub fn stages(&self) -> StagesApi<'_> {
        StagesApi { client: self }
    }

    /// Access the Deliverables API.
    pub fn deliverables(&self) -> DeliverablesApi<'_> {
        DeliverablesApi { client: self }
    }

    /// Access the Analytics API.
    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi { client: self }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> Url {
        self.inner
            .base_url
            .join(path)
            .unwrap_or_else(|_| self.inner.base_url.clone())
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        debug!(name: "api.request", method = %method, path = path, "sending request");
        let mut builder = self.inner.http.request(method, self.url(path));
        if let Some(token) = self.inner.token.read().unwrap().as_deref() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::handle_response(path, response).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::handle_response(path, response).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::handle_response(path, response).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::handle_response(path, response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(name: "api.response", path = path, status = status.as_u16(), "delete succeeded");
            Ok(())
        } else {
            Err(Self::error_from(path, response).await)
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            debug!(name: "api.response", path = path, status = status.as_u16(), "response received");
            Ok(response.json().await?)
        } else {
            Err(Self::error_from(path, response).await)
        }
    }

    async fn error_from(path: &str, response: reqwest::Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = api_message(&body);
        warn!(
            name: "api.error",
            path = path,
            status = status.as_u16(),
            message = %message,
            "request failed"
        );
        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}
