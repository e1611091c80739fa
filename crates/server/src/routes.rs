use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{metrics, openapi::ApiDoc, state::ServerState};

pub mod movies;
pub mod root;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics_endpoint() -> (axum::http::StatusCode, String) {
    metrics::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: info, movie API, and operational endpoints.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    metrics::register_all();

    let api = Router::new()
        .route("/api/movies", get(movies::list_movies).post(movies::create_movie))
        .route("/api/movies/:id", get(movies::get_movie));

    let ops = Router::new()
        .route("/", get(root::welcome))
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .route("/api-docs/openapi.json", get(openapi_json));

    ops.merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx only; client errors are normal outcomes
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
