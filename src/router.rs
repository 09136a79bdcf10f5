use crate::proxy::proxy;
use crate::startup::AppState;
use crate::views::{document_view, translator_view};
use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub const DOCUMENT_ROUTE: &str = "/";
pub const TRANSLATOR_ROUTE: &str = "/translator";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(DOCUMENT_ROUTE, get(document_view))
        .route(TRANSLATOR_ROUTE, get(translator_view))
        .route("/api/*rest", any(proxy))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
