//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    catalog::{api_categories, api_courses, catalog_page},
    course::course_page,
    favorites::{api_favorites, toggle_favorite},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(catalog_page))
        .route("/course/{id}", get(course_page))
        // API endpoints
        .route("/api/courses", get(api_courses))
        .route("/api/categories", get(api_categories))
        .route("/api/favorites", get(api_favorites))
        .route("/api/favorites/{id}/toggle", post(toggle_favorite))
        // Static files
        .nest_service(
            "/static",
            ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        )
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
