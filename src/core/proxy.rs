//! Same-origin proxy for the students REST backend
//!
//! The browser calls `/alunos/...` on this server; requests are forwarded to
//! `BACKEND_URL` with their method, JSON body and `Authorization` header, and
//! the backend's status and body are passed back unchanged.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::any,
};

use crate::core::api::STUDENTS_PATH;
use crate::core::config::Config;

/// Headers copied from the browser request to the backend
const FORWARDED_HEADERS: [header::HeaderName; 3] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: String,
}

impl ProxyState {
    pub fn new(client: reqwest::Client, backend_url: impl Into<String>) -> Self {
        Self {
            client,
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn target_url(&self, uri: &Uri) -> String {
        let path = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        format!("{}{}", self.backend_url, path)
    }
}

/// Build the proxy router, or `None` when no backend is configured
pub fn students_proxy_router(config: &Config) -> Option<Router> {
    let Some(backend_url) = config.backend_url.clone() else {
        tracing::warn!("BACKEND_URL not set, {} proxy disabled", STUDENTS_PATH);
        return None;
    };

    let client = match reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build backend HTTP client: {}", e);
            return None;
        }
    };

    tracing::info!("Proxying {} to {}", STUDENTS_PATH, backend_url);
    Some(proxy_router(ProxyState::new(client, backend_url)))
}

/// Router forwarding every `/alunos` route to the backend
pub fn proxy_router(state: ProxyState) -> Router {
    Router::new()
        .route(STUDENTS_PATH, any(forward))
        .route(&format!("{}/", STUDENTS_PATH), any(forward))
        .route(&format!("{}/{{*rest}}", STUDENTS_PATH), any(forward))
        .with_state(Arc::new(state))
}

async fn forward(
    State(state): State<Arc<ProxyState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let target = state.target_url(&uri);
    tracing::info!("{} {} -> {}", method, uri.path(), target);

    let mut request = state.client.request(method.clone(), &target).body(body);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(e) if e.is_timeout() => {
            tracing::error!("Backend timed out for {} {}: {}", method, target, e);
            return error_response(StatusCode::GATEWAY_TIMEOUT, "Backend timed out");
        }
        Err(e) => {
            tracing::error!("Failed to reach backend for {} {}: {}", method, target, e);
            return error_response(StatusCode::BAD_GATEWAY, "Backend unavailable");
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();

    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to read backend response: {}", e);
            return error_response(StatusCode::BAD_GATEWAY, "Invalid backend response");
        }
    };

    if !status.is_success() {
        tracing::warn!("Backend answered {} for {} {}", status, method, target);
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    response
}

/// Error in the `{"errors": [...]}` shape the client understands
fn error_response(status: StatusCode, message: &str) -> Response {
    let mut response = (status, Json(serde_json::json!({ "errors": [message] }))).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );
    response
}
