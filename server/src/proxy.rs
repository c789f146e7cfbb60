//! Pass-through reverse proxy for the external recipe API.
//!
//! DESIGN
//! ======
//! The client calls relative `/api/...` paths exactly as the UI always did;
//! this handler forwards method, path, query, content headers, and body to
//! `API_UPSTREAM` and relays the response. No backend semantics live here:
//! authentication, persistence, and upload handling all belong to the
//! upstream service.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Largest request body accepted for forwarding. Image uploads are capped
/// at 5 MiB client-side; the margin covers multipart framing.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Shared proxy state: one pooled HTTP client plus the upstream base URL.
#[derive(Clone, Debug)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: String,
}

impl ProxyState {
    #[must_use]
    pub fn new(upstream: String) -> Arc<Self> {
        Arc::new(Self { client: reqwest::Client::new(), upstream })
    }
}

/// Join the upstream base with the inbound path and query.
#[must_use]
pub fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) if !query.is_empty() => format!("{upstream}{path}?{query}"),
        _ => format!("{upstream}{path}"),
    }
}

/// Headers that must not cross a proxy hop. `host` and `content-length`
/// are regenerated by the outbound client.
#[must_use]
pub fn is_hop_by_hop(name: &str) -> bool {
    matches!(
        name,
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

/// Forward one `/api` request upstream and relay the response.
pub async fn forward(State(state): State<Arc<ProxyState>>, req: Request) -> Response {
    let (parts, body) = req.into_parts();

    let Ok(bytes) = to_bytes(body, MAX_BODY_BYTES).await else {
        return StatusCode::PAYLOAD_TOO_LARGE.into_response();
    };

    let url = upstream_url(&state.upstream, parts.uri.path(), parts.uri.query());
    let mut outbound = state.client.request(parts.method.clone(), &url);
    for (name, value) in &parts.headers {
        if !is_hop_by_hop(name.as_str()) {
            outbound = outbound.header(name, value);
        }
    }

    let upstream_response = match outbound.body(bytes).send().await {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(%url, %error, "upstream request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = upstream_response.status();
    let headers = upstream_response.headers().clone();
    let body = match upstream_response.bytes().await {
        Ok(body) => body,
        Err(error) => {
            tracing::warn!(%url, %error, "upstream body read failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let mut builder = Response::builder().status(status);
    for (name, value) in &headers {
        if !is_hop_by_hop(name.as_str()) {
            builder = builder.header(name, value);
        }
    }
    builder
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
}
