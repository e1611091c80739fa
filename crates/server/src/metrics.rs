use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static MOVIES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "movie_api_movies_created_total",
        "Total movies added to the catalog"
    )
    .expect("register movies_created_total")
});

pub static VALIDATION_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "movie_api_validation_failures_total",
        "Total create requests rejected by field validation"
    )
    .expect("register validation_failures_total")
});

pub static MOVIE_NOT_FOUND_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "movie_api_movie_not_found_total",
        "Total lookups for ids with no record"
    )
    .expect("register movie_not_found_total")
});

/// Touch every counter so it shows up in the exposition before first use.
pub fn register_all() {
    Lazy::force(&MOVIES_CREATED_TOTAL);
    Lazy::force(&VALIDATION_FAILURES_TOTAL);
    Lazy::force(&MOVIE_NOT_FOUND_TOTAL);
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
