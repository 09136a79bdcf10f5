//! Development proxy: `/api/<rest>` is forwarded to `<target>/<rest>`.

use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

pub const PROXY_PREFIX: &str = "/api";

/// Forwarding target plus the client used to reach it.
#[derive(Debug, Clone)]
pub struct ProxyTarget {
    http: reqwest::Client,
    origin: String,
}

impl ProxyTarget {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Rewrite an incoming URI: strip the `/api` prefix, keep the query.
    pub fn forward_url(&self, uri: &Uri) -> String {
        let path = uri.path();
        let stripped = path.strip_prefix(PROXY_PREFIX).unwrap_or(path);
        let stripped = if stripped.starts_with('/') {
            stripped.to_string()
        } else {
            format!("/{}", stripped)
        };

        match uri.query() {
            Some(query) => format!("{}{}?{}", self.origin, stripped, query),
            None => format!("{}{}", self.origin, stripped),
        }
    }
}

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: [header::HeaderName; 5] = [
    header::HOST,
    header::CONNECTION,
    header::CONTENT_LENGTH,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP.iter() {
        headers.remove(name);
    }
}

pub async fn proxy(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    mut headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = state.proxy.forward_url(&uri);
    debug!("Proxying {} {} -> {}", method, uri, url);

    strip_hop_by_hop(&mut headers);

    let upstream = state
        .proxy
        .http
        .request(method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await;

    let upstream = match upstream {
        Ok(response) => response,
        Err(e) => {
            warn!("Proxy request to {} failed: {}", url, e);
            return (StatusCode::BAD_GATEWAY, format!("Proxy error: {}", e)).into_response();
        }
    };

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    strip_hop_by_hop(&mut response_headers);

    match upstream.bytes().await {
        Ok(bytes) => (status, response_headers, bytes).into_response(),
        Err(e) => {
            warn!("Failed to read proxied response from {}: {}", url, e);
            (StatusCode::BAD_GATEWAY, format!("Proxy error: {}", e)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_url_strips_prefix() {
        let target = ProxyTarget::new("http://localhost:8080");
        let uri: Uri = "/api/document/7".parse().unwrap();
        assert_eq!(target.forward_url(&uri), "http://localhost:8080/document/7");
    }

    #[test]
    fn test_forward_url_keeps_query() {
        let target = ProxyTarget::new("http://localhost:8080/");
        let uri: Uri = "/api/translator?page=0&size=10&name=Ana".parse().unwrap();
        assert_eq!(
            target.forward_url(&uri),
            "http://localhost:8080/translator?page=0&size=10&name=Ana"
        );
    }

    #[test]
    fn test_forward_url_only_strips_leading_prefix() {
        let target = ProxyTarget::new("http://backend");
        let uri: Uri = "/api/api/v1/document".parse().unwrap();
        assert_eq!(target.forward_url(&uri), "http://backend/api/v1/document");
    }

    #[test]
    fn test_strip_hop_by_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "localhost:8000".parse().unwrap());
        headers.insert(header::CONTENT_LENGTH, "12".parse().unwrap());
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());

        strip_hop_by_hop(&mut headers);

        assert!(headers.get(header::HOST).is_none());
        assert!(headers.get(header::CONTENT_LENGTH).is_none());
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
    }
}
