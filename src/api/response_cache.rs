use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, warn};

use super::AppState;
use crate::cache::CachedResponse;

const CACHE_HEADER: &str = "x-cache";

/// Serves a stored response for an identical request URI while it is fresh,
/// otherwise runs the handler and stores a successful result.
#[allow(clippy::cast_precision_loss)]
pub async fn cache_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(cache) = state.response_cache() else {
        return next.run(req).await;
    };

    let key = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), ToString::to_string);

    if let Some(cached) = cache.get(&key).await {
        metrics::counter!("response_cache_hits_total").increment(1);
        debug!(key = %key, "Response cache hit");
        return with_cache_header(cached.into_response(), "HIT");
    }

    metrics::counter!("response_cache_misses_total").increment(1);

    let response = next.run(req).await;
    if !response.status().is_success() {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(key = %key, "Failed to buffer response for caching: {}", e);
            return with_cache_header(Response::from_parts(parts, Body::empty()), "MISS");
        }
    };

    let live = cache
        .insert(
            key,
            CachedResponse {
                status: parts.status,
                content_type: parts.headers.get(header::CONTENT_TYPE).cloned(),
                body: bytes.clone(),
            },
        )
        .await;
    metrics::gauge!("response_cache_entries").set(live as f64);

    with_cache_header(Response::from_parts(parts, Body::from(bytes)), "MISS")
}

fn with_cache_header(mut response: Response, value: &'static str) -> Response {
    response
        .headers_mut()
        .insert(CACHE_HEADER, HeaderValue::from_static(value));
    response
}
