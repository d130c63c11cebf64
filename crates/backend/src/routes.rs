use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/widgets", get(handlers::widgets::list_all))
        .route("/api/widgets/:id", get(handlers::widgets::get_by_id))
        .route(
            "/api/widgets/:id/props",
            post(handlers::widgets::apply_props),
        )
        .route(
            "/api/widgets/:id/options",
            put(handlers::widgets::replace_options),
        )
}
