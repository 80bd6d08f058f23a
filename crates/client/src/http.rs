//! Shared HTTP plumbing.
//!
//! One `reqwest` client with a cookie store carries the session; every
//! request gets the JSON content type and the `X-Client-Type` discriminator
//! from the base configuration. Resource modules build on the typed helpers
//! here instead of assembling requests themselves.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// `{ "data": ... }` envelope several endpoints wrap their payload in.
#[derive(Debug, Deserialize)]
pub(crate) struct Enveloped<T> {
    pub data: T,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Client over the given configuration. The cookie store is what makes
    /// the session stick; the client never sees a token.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client_type = HeaderValue::from_str(&config.client_type)
            .map_err(|e| ApiError::Config(format!("client type header: {e}")))?;
        headers.insert("x-client-type", client_type);

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let mut req = self.http.get(self.url(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        self.execute(req).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "POST");
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    /// POST with no body and no interesting response body (e.g. logout).
    pub(crate) async fn post_no_content(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(path, "POST");
        let resp = self
            .http
            .post(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(resp).await.map(|_| ())
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "PUT");
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "DELETE");
        self.execute(self.http.delete(self.url(path))).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = Self::check_status(resp).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Maps the status line to the error taxonomy and returns the body of a
    /// successful response.
    async fn check_status(resp: reqwest::Response) -> Result<String, ApiError> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthenticated);
        }
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "request rejected");
            return Err(ApiError::from_error_body(status.as_u16(), &body));
        }
        Ok(body)
    }
}
