//! Usage: HTTP routes for the served page (root document + favicon).

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::assets::ContentAssets;

pub(super) fn router(assets: Arc<ContentAssets>) -> Router {
    Router::new()
        .route("/", get(serve_root))
        .route("/favicon.ico", get(serve_favicon))
        .with_state(assets)
}

// The root document is read per request; the favicon is served from the
// bytes preloaded at startup.
async fn serve_root(State(assets): State<Arc<ContentAssets>>) -> Response {
    let index_path = assets.index_path();
    match tokio::fs::read(&index_path).await {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::warn!("failed to read {}: {err}", index_path.display());
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn serve_favicon(State(assets): State<Arc<ContentAssets>>) -> Response {
    (
        [(header::CONTENT_TYPE, "image/x-icon")],
        assets.icon.clone(),
    )
        .into_response()
}
