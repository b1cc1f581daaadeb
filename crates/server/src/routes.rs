use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::store::CustomerStore;

pub mod customers;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router over a store handle.
///
/// The static `/customers/batchUpdate` route must coexist with
/// `/customers/:id`; axum prefers the static segment, so the batch
/// endpoint never gets captured as an id.
pub fn build_router(store: CustomerStore, cors: CorsLayer) -> Router {
    // Public routes (overview + health)
    let public = Router::new()
        .route("/", get(customers::overview))
        .route("/health", get(health));

    // Customer CRUD routes
    let api = Router::new()
        .route("/customers", get(customers::list).post(customers::create))
        .route("/customers/batchUpdate", post(customers::batch_update))
        .route(
            "/customers/:id",
            get(customers::get_one)
                .put(customers::update)
                .delete(customers::remove),
        );

    // Compose
    public
        .merge(api)
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
