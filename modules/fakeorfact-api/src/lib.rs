pub mod rest;

use std::path::Path;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use fakeorfact_store::ClaimStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub struct AppState {
    pub store: Arc<dyn ClaimStore>,
}

/// Build the HTTP router. When `public_dir` is set, every path not matched by
/// an API route is served from it.
pub fn router(store: Arc<dyn ClaimStore>, public_dir: Option<&Path>) -> Router {
    let state = Arc::new(AppState { store });

    let api = Router::new()
        .route("/api/claims", get(rest::api_claims))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let app = match public_dir {
        Some(dir) => api.fallback_service(
            ServeDir::new(dir).not_found_service(ServeFile::new(dir.join("index.html"))),
        ),
        None => api,
    };

    // Method + path only, no query string.
    app.layer(
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }),
    )
}
