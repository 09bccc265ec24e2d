//! Page routes for the single-page frontend.
//!
//! Known client routes are answered with the frontend's `index.html`; any
//! other path is redirected to `/`.

use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, Uri, header},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use core_types::router::{self, Resolution};
use tracing::{debug, warn};
use web_types::ApiError;

use crate::state::AppState;

/// Fallback for paths that are not API routes or static files.
pub async fn spa_fallback(State(state): State<AppState>, uri: Uri) -> Response {
    match router::resolve(uri.path()) {
        Resolution::Render(page) => {
            debug!(?page, path = uri.path(), "serving frontend");
            serve_index(&state).await
        }
        Resolution::Redirect { to } => {
            debug!(path = uri.path(), to, "unknown page, redirecting");
            Redirect::to(to).into_response()
        }
    }
}

async fn serve_index(state: &AppState) -> Response {
    let path = state.index_html();
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "frontend index not readable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiError::with_code(
                    "Frontend has not been built",
                    "FRONTEND_MISSING",
                )),
            )
                .into_response()
        }
    }
}

/// Strip a single trailing slash from the path and redirect permanently,
/// keeping the query string.
pub async fn redirect_trailing_slash(req: Request, next: Next) -> Response {
    if let Some(target) = without_trailing_slash(req.uri()) {
        return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]).into_response();
    }
    next.run(req).await
}

fn without_trailing_slash(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.len() <= 1 {
        return None;
    }
    let trimmed = path.strip_suffix('/')?;
    Some(match uri.query() {
        Some(query) => format!("{trimmed}?{query}"),
        None => trimmed.to_string(),
    })
}
