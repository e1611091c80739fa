use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::startup::build_app;
use server::ServerState;

fn app() -> Router {
    build_app(ServerState::seeded("http://localhost:8080"))
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Vec<u8>)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, bytes.to_vec()))
}

fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method("GET").uri(uri).body(Body::empty())?)
}

fn post_json(uri: &str, body: &Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

fn violation_fields(body: &Value) -> Vec<String> {
    body["violations"]
        .as_array()
        .map(|vs| vs.iter().filter_map(|v| v["field"].as_str().map(str::to_string)).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn list_returns_seeded_movies() -> anyhow::Result<()> {
    let app = app();
    let (status, bytes) = send(&app, get("/api/movies")?).await?;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes)?;
    let movies = body.as_array().expect("array");
    assert_eq!(movies.len(), 3);
    assert_eq!(movies[0]["id"], 1);
    assert_eq!(movies[0]["name"], "The Shawshank Redemption");
    assert_eq!(movies[1]["releaseYear"], 1972);
    assert_eq!(movies[2]["genre"], "Sci-Fi");
    Ok(())
}

#[tokio::test]
async fn create_then_get_round_trip() -> anyhow::Result<()> {
    let app = app();
    let payload = json!({"name":"X","description":"Y","genre":"Z","releaseYear":2020,"rating":7.5});
    let (status, bytes) = send(&app, post_json("/api/movies", &payload)?).await?;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&bytes)?;
    let id = created["id"].as_i64().expect("id");
    assert!(id >= 4);

    let (status, bytes) = send(&app, get(&format!("/api/movies/{id}"))?).await?;
    assert_eq!(status, StatusCode::OK);
    let fetched: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(fetched, json!({"id": id, "name":"X","description":"Y","genre":"Z","releaseYear":2020,"rating":7.5}));

    let (_, bytes) = send(&app, get("/api/movies")?).await?;
    let all: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(all.as_array().map(Vec::len), Some(4));
    Ok(())
}

#[tokio::test]
async fn successive_creates_get_increasing_ids() -> anyhow::Result<()> {
    let app = app();
    let mut ids = Vec::new();
    for i in 0..5 {
        let payload = json!({"name": format!("m{i}"), "description":"d", "genre":"g", "releaseYear": 2000});
        let (status, bytes) = send(&app, post_json("/api/movies", &payload)?).await?;
        assert_eq!(status, StatusCode::CREATED);
        let created: Value = serde_json::from_slice(&bytes)?;
        ids.push(created["id"].as_i64().expect("id"));
    }
    assert_eq!(ids, vec![4, 5, 6, 7, 8]);
    Ok(())
}

#[tokio::test]
async fn client_supplied_id_is_ignored() -> anyhow::Result<()> {
    let app = app();
    let payload = json!({"id": 1, "name":"N","description":"D","genre":"G","releaseYear":1999});
    let (status, bytes) = send(&app, post_json("/api/movies", &payload)?).await?;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(created["id"], 4);
    assert!(created["rating"].is_null());
    Ok(())
}

#[tokio::test]
async fn missing_name_is_reported() -> anyhow::Result<()> {
    let app = app();
    let payload = json!({"description":"Y","genre":"Z","releaseYear":2020});
    let (status, bytes) = send(&app, post_json("/api/movies", &payload)?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(violation_fields(&body), vec!["name"]);
    assert_eq!(body["violations"][0]["message"], "Movie name is required");
    Ok(())
}

#[tokio::test]
async fn release_year_out_of_range_is_reported() -> anyhow::Result<()> {
    let app = app();
    let payload = json!({"name":"X","description":"Y","genre":"Z","releaseYear":1800});
    let (status, bytes) = send(&app, post_json("/api/movies", &payload)?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(violation_fields(&body), vec!["releaseYear"]);
    Ok(())
}

#[tokio::test]
async fn every_violation_is_reported_and_nothing_is_stored() -> anyhow::Result<()> {
    let app = app();
    let payload = json!({"name":"  ","description":"Y","genre":"Z","releaseYear":1800,"rating":11});
    let (status, bytes) = send(&app, post_json("/api/movies", &payload)?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(violation_fields(&body), vec!["name", "releaseYear", "rating"]);

    let (_, bytes) = send(&app, get("/api/movies")?).await?;
    let all: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(all.as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_bad_request() -> anyhow::Result<()> {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/movies")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let (status, bytes) = send(&app, req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["error"], "Bad Request");

    let wrong_type = json!({"name":"X","description":"Y","genre":"Z","releaseYear":"soon"});
    let (status, _) = send(&app, post_json("/api/movies", &wrong_type)?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_id_is_not_found_with_empty_body() -> anyhow::Result<()> {
    let app = app();
    let (status, bytes) = send(&app, get("/api/movies/999999")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(bytes.is_empty());
    Ok(())
}

#[tokio::test]
async fn malformed_id_is_bad_request() -> anyhow::Result<()> {
    let app = app();
    let (status, bytes) = send(&app, get("/api/movies/abc")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["status"], 400);
    Ok(())
}

#[tokio::test]
async fn root_describes_the_api() -> anyhow::Result<()> {
    let app = app();
    let (status, bytes) = send(&app, get("/")?).await?;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["application"], "Movie Management API");
    assert_eq!(body["status"], "running");
    assert_eq!(body["endpoints"]["Add New Movie"], "POST http://localhost:8080/api/movies");
    assert_eq!(body["sampleRequest"]["method"], "POST");
    Ok(())
}

#[tokio::test]
async fn operational_endpoints_respond() -> anyhow::Result<()> {
    let app = app();
    let (status, bytes) = send(&app, get("/health")?).await?;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["status"], "ok");

    let (status, bytes) = send(&app, get("/metrics")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(bytes)?.contains("movie_api_movies_created_total"));

    let (status, bytes) = send(&app, get("/api-docs/openapi.json")?).await?;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_slice(&bytes)?;
    assert!(doc["paths"]["/api/movies/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn update_and_delete_are_not_routed() -> anyhow::Result<()> {
    let app = app();
    let req = Request::builder().method("DELETE").uri("/api/movies/1").body(Body::empty())?;
    let (status, _) = send(&app, req).await?;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    Ok(())
}
