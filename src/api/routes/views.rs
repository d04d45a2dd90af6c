//! View Routes
//!
//! Fallback handler that serves routed views as HTML. The path is resolved
//! through the route table; anything the table does not know becomes a 404.

use axum::{
    extract::State,
    http::{Method, Uri},
    response::Html,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::view::{render_document, render_view};

/// GET <any path>
pub async fn render_route(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> ApiResult<Html<String>> {
    let path = uri.path();

    let view = state
        .routes
        .resolve(path)
        .ok_or_else(|| ApiError::NotFound(format!("no view for path {}", path)))?;

    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::MethodNotAllowed(method.to_string()));
    }

    tracing::debug!(path, %view, "Rendering view");

    let page = render_view(view, &state.snapshot);
    Ok(Html(render_document(&page, &state.routes)?))
}
