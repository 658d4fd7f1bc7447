//! Book search service: validates `GET /` queries, asks Goodreads, and
//! answers with the results as a sorted JSON array.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use axum::{routing::get, Router};
use routes::{
    health::health_check,
    search::{search_books, Source},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the service router around the given book source.
pub fn app(source: Source) -> Router {
    Router::new()
        .route("/", get(search_books))
        .route("/status", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(source)
}
