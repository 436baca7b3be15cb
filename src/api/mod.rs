//! HTTP request surface
//!
//! Three operations, each taking a single `target` query parameter:
//! `/asn`, `/ip`, and `/prefix`. A missing target is rejected with 400
//! before any upstream call; any propagated lookup error becomes a 500
//! carrying the error's message. Successful responses advertise a
//! shared-cache max-age matching the routing upstream's refresh cadence.

use crate::config::CACHE_MAX_AGE_SECS;
use crate::error::LookupError;
use crate::queries;
use crate::services::Services;
use axum::extract::{Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Query parameters accepted by the three lookup routes.
#[derive(Debug, Deserialize)]
struct LookupParams {
    target: Option<String>,
}

/// Error form surfaced to API clients.
enum ApiError {
    /// No target parameter supplied; rejected before any upstream call
    MissingTarget,
    /// A lookup failed; the body carries the underlying error's message
    Lookup(LookupError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingTarget => (
                StatusCode::BAD_REQUEST,
                cache_headers(),
                Json(json!({ "error": "Target required." })),
            )
                .into_response(),
            ApiError::Lookup(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
        }
    }
}

/// Cache directives attached to cacheable responses.
fn cache_headers() -> [(HeaderName, String); 1] {
    [(
        header::CACHE_CONTROL,
        format!("max-age=0, s-maxage={CACHE_MAX_AGE_SECS}"),
    )]
}

async fn asn_lookup(
    State(services): State<Arc<Services>>,
    Query(params): Query<LookupParams>,
) -> Result<Response, ApiError> {
    let target = params.target.ok_or(ApiError::MissingTarget)?;
    let info = queries::asn_info(&services, &target).await.map_err(|err| {
        warn!(%target, error = %err, "ASN lookup failed");
        ApiError::Lookup(err)
    })?;
    Ok((cache_headers(), Json(info)).into_response())
}

async fn ip_lookup(
    State(services): State<Arc<Services>>,
    Query(params): Query<LookupParams>,
) -> Result<Response, ApiError> {
    let target = params.target.ok_or(ApiError::MissingTarget)?;
    let info = queries::ip_info(&services, &target).await.map_err(|err| {
        warn!(%target, error = %err, "IP lookup failed");
        ApiError::Lookup(err)
    })?;
    Ok((cache_headers(), Json(info)).into_response())
}

async fn prefix_lookup(
    State(services): State<Arc<Services>>,
    Query(params): Query<LookupParams>,
) -> Result<Response, ApiError> {
    let target = params.target.ok_or(ApiError::MissingTarget)?;
    let info = queries::prefix_info(&services, &target)
        .await
        .map_err(|err| {
            warn!(%target, error = %err, "prefix lookup failed");
            ApiError::Lookup(err)
        })?;
    Ok((cache_headers(), Json(info)).into_response())
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Try /asn, /ip, or /prefix endpoints." })),
    )
        .into_response()
}

/// Build the application router.
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/asn", get(asn_lookup))
        .route("/ip", get(ip_lookup))
        .route("/prefix", get(prefix_lookup))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(services)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    /// Services built from defaults; fine for routes that never reach an
    /// upstream.
    fn test_router() -> Router {
        let services = Arc::new(Services::new(&Config::default()).unwrap());
        router(services)
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_target_is_400() {
        for route in ["/asn", "/ip", "/prefix"] {
            let response = test_router()
                .oneshot(Request::get(route).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{route}");
            let cache = response
                .headers()
                .get(header::CACHE_CONTROL)
                .cloned();
            assert_eq!(
                cache.unwrap().to_str().unwrap(),
                "max-age=0, s-maxage=21600"
            );
            let json = body_json(response).await;
            assert_eq!(json["error"], "Target required.");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_with_hint() {
        let response = test_router()
            .oneshot(Request::get("/bogus").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Try /asn, /ip, or /prefix endpoints.");
    }

    #[tokio::test]
    async fn test_reserved_asn_surfaces_as_500() {
        // Validation happens before any socket is opened, so this works
        // without reachable upstreams.
        let response = test_router()
            .oneshot(
                Request::get("/asn?target=AS65001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "'AS65001' is reserved for private use.");
    }
}
