use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::ServerState;

pub const APPLICATION_NAME: &str = "Movie Management API";

const SAMPLE_BODY: &str = r#"{ "name": "Movie Name", "description": "Description", "genre": "Genre", "releaseYear": 2024, "rating": 8.5 }"#;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub application: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: BTreeMap<&'static str, String>,
    pub sample_request: SampleRequest,
}

#[derive(Serialize, Debug)]
pub struct SampleRequest {
    pub method: &'static str,
    pub url: String,
    pub body: &'static str,
}

impl ServiceInfo {
    pub fn for_base_url(base: &str) -> Self {
        let collection = format!("{base}/api/movies");
        let mut endpoints = BTreeMap::new();
        endpoints.insert("Get All Movies", format!("GET {collection}"));
        endpoints.insert("Get Movie by ID", format!("GET {collection}/{{id}}"));
        endpoints.insert("Add New Movie", format!("POST {collection}"));
        Self {
            application: APPLICATION_NAME,
            version: env!("CARGO_PKG_VERSION"),
            status: "running",
            endpoints,
            sample_request: SampleRequest { method: "POST", url: collection, body: SAMPLE_BODY },
        }
    }
}

#[utoipa::path(get, path = "/", tag = "info", responses((status = 200, description = "Service information")))]
pub async fn welcome(State(state): State<ServerState>) -> Json<ServiceInfo> {
    Json(ServiceInfo::for_base_url(&state.public_url))
}
