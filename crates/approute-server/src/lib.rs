// approute-server - HTTP host for the demo application
// Maps every GET path onto the renderer and NotFound onto a 404 document

pub mod pages;

use approute::{Document, Renderer, ResolvedMetadata};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    renderer: Arc<Renderer>,
}

/// Builds the axum router serving `renderer`
pub fn router(renderer: Renderer) -> Router {
    let state = AppState {
        renderer: Arc::new(renderer),
    };

    Router::new()
        .route("/", get(page_handler))
        .route("/*path", get(page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Raw request path, still percent-encoded; the router decodes segments itself
async fn page_handler(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    dispatch_route(&state, uri.path(), &headers).await
}

/// JSON body returned when the client asks for `application/json`
#[derive(Serialize)]
struct PagePayload<'a> {
    path: &'a str,
    status: u16,
    metadata: &'a ResolvedMetadata,
    html: &'a str,
}

/// Render a route, falling back to the not-found document
async fn dispatch_route(state: &AppState, route: &str, headers: &HeaderMap) -> Response {
    let (status, document) = match state.renderer.render(route).await {
        Ok(document) => (StatusCode::OK, document),
        Err(_) => (StatusCode::NOT_FOUND, state.renderer.render_not_found().await),
    };

    if accepts_json(headers) {
        return json_response(route, status, &document);
    }

    (status, Html(document.into_html())).into_response()
}

fn json_response(route: &str, status: StatusCode, document: &Document) -> Response {
    let payload = PagePayload {
        path: route,
        status: status.as_u16(),
        metadata: &document.metadata,
        html: document.body_html(),
    };
    (status, Json(payload)).into_response()
}

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}
