use crate::interface_adapters::handlers::{
    add, divide, handle_panic, health, method_not_allowed, multiply, not_found, subtract,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub fn app(max_body_bytes: usize) -> Router {
    let routes = Router::new()
        .route("/post/add", post(add))
        .route("/post/subtract", post(subtract))
        .route("/post/multiply", post(multiply))
        .route("/post/divide", post(divide))
        .route("/health", get(health))
        .fallback(not_found)
        // Must follow the routes it applies to.
        .method_not_allowed_fallback(method_not_allowed);

    with_middleware(routes, max_body_bytes)
}

pub(crate) fn with_middleware(routes: Router, max_body_bytes: usize) -> Router {
    routes
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}
