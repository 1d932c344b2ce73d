//! HTTP client for the outreach backend REST API.
//!
//! Every call is a single best-effort attempt: no retry, no timeout, no
//! back-off. Failures are logged here and returned to the caller, which
//! decides on any fallback.

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use outreach_core::{
    ClientBrief, ContactRequest, ContactResponse, HealthStatus, Influencer, SearchRequest,
};

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Client for the outreach backend.
///
/// Use [`OutreachClient::new`] with the configured base URL, or point it at a
/// wiremock server in tests.
#[derive(Debug, Clone)]
pub struct OutreachClient {
    client: Client,
    base_url: Url,
}

impl OutreachClient {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:5000/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Builder`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidUrl`] if `base_url` does
    /// not parse.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent("outreach/0.1 (influencer-dashboard)")
            .build()
            .map_err(ApiError::Builder)?;

        // Exactly one trailing slash so joined endpoints extend the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /influencers`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn list_influencers(&self) -> Result<Vec<Influencer>, ApiError> {
        self.get("/influencers").await
    }

    /// `POST /influencers/search`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn search_influencers(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Influencer>, ApiError> {
        self.post("/influencers/search", request).await
    }

    /// `POST /contact`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn contact_influencer(
        &self,
        request: &ContactRequest,
    ) -> Result<ContactResponse, ApiError> {
        self.post("/contact", request).await
    }

    /// `POST /briefs`. The backend echoes the brief with its own fields filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn create_brief(&self, brief: &ClientBrief) -> Result<ClientBrief, ApiError> {
        self.post("/briefs", brief).await
    }

    /// `GET /health`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health").await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, endpoint, None).await
    }

    async fn post<T, B>(&self, endpoint: &str, payload: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(payload)).await
    }

    /// Issues `method` against `endpoint` and decodes the JSON response.
    ///
    /// A JSON content type is only set when `payload` is present. Any failure
    /// is logged before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let result = self.send(method.clone(), endpoint, payload).await;
        if let Err(err) = &result {
            tracing::error!(%method, endpoint, error = %err, "API request failed");
        }
        result
    }

    async fn send<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(%method, %url, "sending API request");

        let mut request = self.client.request(method, url);
        if let Some(body) = payload {
            request = request.json(body);
        }

        let transport = |source| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{endpoint}", self.base_url),
                reason: e.to_string(),
            })
    }
}
