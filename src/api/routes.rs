use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::model::{Manager, Workers};
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Manager resource
        .route("/api/managers", post(handlers::create::<Manager, S>))
        .route("/api/managers", get(handlers::get_all::<Manager, S>))
        .route("/api/managers/:id", get(handlers::get_one::<Manager, S>))
        .route("/api/managers/:id", put(handlers::update::<Manager, S>))
        .route(
            "/api/managers/:id",
            patch(handlers::partial_update::<Manager, S>),
        )
        .route("/api/managers/:id", delete(handlers::delete::<Manager, S>))
        // Workers resource
        .route("/api/workers", post(handlers::create::<Workers, S>))
        .route("/api/workers", get(handlers::get_all::<Workers, S>))
        .route("/api/workers/:id", get(handlers::get_one::<Workers, S>))
        .route("/api/workers/:id", put(handlers::update::<Workers, S>))
        .route(
            "/api/workers/:id",
            patch(handlers::partial_update::<Workers, S>),
        )
        .route("/api/workers/:id", delete(handlers::delete::<Workers, S>))
}
