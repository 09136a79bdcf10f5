//! Shared HTTP client bound to the backend's base URL.

use crate::error::{ApiError, ErrorEnvelope};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Query string of a paginated list request: `page`, `size`, then only the
/// filter keys that are present.
#[derive(Debug, Serialize)]
pub struct ListQuery<'a, F: Serialize> {
    pub page: u32,
    pub size: u32,
    #[serde(flatten)]
    pub filter: &'a F,
}

/// One shared client for all resource services.
///
/// Cloning is cheap: `reqwest::Client` is reference-counted and the base URL
/// never changes after construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, ApiError> {
        // Without the trailing slash, Url::join would replace the last segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base_url = Url::parse(&normalized)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{} cannot be a base", base_url)));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a resource path (e.g. `document/7`) against the base URL.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?;
        let response = self.send(request, Method::GET, path).await?;
        decode(response).await
    }

    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path)?.query(query);
        let response = self.send(request, Method::GET, path).await?;
        decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body);
        let response = self.send(request, Method::POST, path).await?;
        decode(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path)?.json(body);
        let response = self.send(request, Method::PUT, path).await?;
        decode(response).await
    }

    /// DELETE with the response body discarded.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, path)?;
        self.send(request, Method::DELETE, path).await?;
        Ok(())
    }

    /// POST a multipart form with the response body discarded.
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<(), ApiError> {
        let request = self.request(Method::POST, path)?.multipart(form);
        self.send(request, Method::POST, path).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.http.request(method, self.url(path)?))
    }

    async fn send(
        &self,
        request: RequestBuilder,
        method: Method,
        path: &str,
    ) -> Result<Response, ApiError> {
        debug!("{} {}", method, path);

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed before a response arrived: {}", method, path, e);
            ApiError::Network(e)
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(
                "{} {} returned {} with an unreadable body: {}",
                method, path, status, e
            );
            ApiError::Network(e)
        })?;

        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => {
                warn!(
                    "{} {} returned {}: {}",
                    method, path, status, envelope.message
                );
                Err(ApiError::Server { status, envelope })
            }
            Err(_) => {
                warn!("{} {} returned {}: {}", method, path, status, body);
                Err(ApiError::Status { status, body })
            }
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json().await.map_err(ApiError::Decode)
}
