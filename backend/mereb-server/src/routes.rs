use crate::{
    AppState, create_person, delete_person, endpoint_not_found, get_person, health, list_persons,
    update_person,
};

use axum::{
    Router,
    http::Method,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Person endpoints
        .route("/person", get(list_persons).post(create_person))
        .route(
            "/person/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        // Health check
        .route("/health", get(health::health_check))
        // Unknown paths and unsupported methods
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(endpoint_not_found)
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any),
        )
}
