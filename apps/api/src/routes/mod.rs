pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::editor::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route(
            "/api/v1/sessions/:id/preview",
            get(handlers::handle_get_preview),
        )
        // Document edits
        .route(
            "/api/v1/sessions/:id/document",
            post(handlers::handle_apply_update),
        )
        .route(
            "/api/v1/sessions/:id/document/import",
            post(handlers::handle_import_content),
        )
        // Style acquisition
        .route(
            "/api/v1/sessions/:id/style",
            put(handlers::handle_set_style),
        )
        .route(
            "/api/v1/sessions/:id/style/preset",
            put(handlers::handle_select_preset),
        )
        .route(
            "/api/v1/sessions/:id/style/analyze",
            post(handlers::handle_analyze_style),
        )
        // Per-field AI polish
        .route("/api/v1/sessions/:id/polish", post(handlers::handle_polish))
        .with_state(state)
}
