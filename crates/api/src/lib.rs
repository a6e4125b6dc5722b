//! HTTP API server with observability for the catalog admin system.
//!
//! Provides REST endpoints for category management, with structured logging
//! (tracing) and Prometheus metrics. Use-case outcomes map onto responses
//! here; the core below this layer knows nothing about HTTP.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use application::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryByIdUseCase, ListCategoriesUseCase,
    UpdateCategoryUseCase,
};
use axum::Router;
use axum::routing::{delete, get, post, put};
use category_store::CategoryGateway;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::categories::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<G: CategoryGateway + 'static>(
    state: Arc<AppState<G>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/categories", post(routes::categories::create::<G>))
        .route("/categories", get(routes::categories::list::<G>))
        .route("/categories/{id}", get(routes::categories::get_by_id::<G>))
        .route("/categories/{id}", put(routes::categories::update_by_id::<G>))
        .route(
            "/categories/{id}",
            delete(routes::categories::delete_by_id::<G>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Composition root: constructs every use case around one gateway.
pub fn create_state<G: CategoryGateway + Clone>(gateway: G) -> Arc<AppState<G>> {
    Arc::new(AppState {
        create_category: CreateCategoryUseCase::new(gateway.clone()),
        get_category_by_id: GetCategoryByIdUseCase::new(gateway.clone()),
        update_category: UpdateCategoryUseCase::new(gateway.clone()),
        delete_category: DeleteCategoryUseCase::new(gateway.clone()),
        list_categories: ListCategoriesUseCase::new(gateway),
    })
}
