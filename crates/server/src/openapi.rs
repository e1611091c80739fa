use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDoc {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub genre: String,
    pub release_year: i32,
    pub rating: Option<f64>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieInputDoc {
    /// Required, non-blank.
    pub name: String,
    /// Required, non-blank.
    pub description: String,
    /// Required, non-blank.
    pub genre: String,
    /// Required, 1900..=2100.
    pub release_year: i32,
    /// Optional, 0..=10.
    pub rating: Option<f64>,
}

#[derive(ToSchema)]
pub struct FieldViolationDoc { pub field: String, pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub status: u16,
    pub error: String,
    pub message: Option<String>,
    pub violations: Vec<FieldViolationDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root::welcome,
        crate::routes::movies::create_movie,
        crate::routes::movies::get_movie,
        crate::routes::movies::list_movies,
    ),
    components(
        schemas(
            HealthResponse,
            MovieDoc,
            MovieInputDoc,
            FieldViolationDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "info"),
        (name = "movies")
    )
)]
pub struct ApiDoc;
