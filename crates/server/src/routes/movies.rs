use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use models::{Movie, MovieInput};
use tracing::{debug, info};

use crate::errors::JsonApiError;
use crate::metrics::{MOVIES_CREATED_TOTAL, MOVIE_NOT_FOUND_TOTAL, VALIDATION_FAILURES_TOTAL};
use crate::state::ServerState;

/// Add a movie. Every violated field constraint is reported, not just the first.
#[utoipa::path(
    post,
    path = "/api/movies",
    tag = "movies",
    request_body = crate::openapi::MovieInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MovieDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_movie(
    State(state): State<ServerState>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), JsonApiError> {
    let Json(input) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "create_movie_bad_body");
        JsonApiError::from(rejection)
    })?;

    let candidate = input.validate().map_err(|e| {
        VALIDATION_FAILURES_TOTAL.inc();
        info!(violations = e.violations().len(), "create_movie_rejected");
        JsonApiError::from(e)
    })?;

    let movie = state.movies.add_movie(candidate).await;
    MOVIES_CREATED_TOTAL.inc();
    info!(id = movie.id, name = %movie.name, "movie_created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Fetch one movie. An unknown id is a plain 404 with no body.
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MovieDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_movie(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, JsonApiError> {
    let Path(id) = id?;
    match state.movies.get_movie_by_id(id).await {
        Some(movie) => Ok(Json(movie).into_response()),
        None => {
            MOVIE_NOT_FOUND_TOTAL.inc();
            debug!(id, "movie_not_found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movies",
    responses((status = 200, description = "OK", body = [crate::openapi::MovieDoc]))
)]
pub async fn list_movies(State(state): State<ServerState>) -> Json<Vec<Movie>> {
    let movies = state.movies.get_all_movies().await;
    debug!(count = movies.len(), "list_movies");
    Json(movies)
}
