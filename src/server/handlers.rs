//! HTTP request handlers for API endpoints

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, info};

use super::{AppState, errors::ApiError, form::decode_form_content, types::HealthResponse};
use crate::table_extractor::TableConverter;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Landing page with the paste-and-convert form
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Convert the first table of the posted HTML to CSV
///
/// The body is `content=<urlencoded html>`. The CSV is returned as a JSON
/// string unless the client asks for `text/csv`. Body rejections, including
/// the size limit, are reported as JSON errors like every other failure.
pub async fn convert_html(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let body = body?;
    let body = std::str::from_utf8(&body).map_err(|_| ApiError::BodyRead)?;

    debug!(bytes = body.len(), "Decoding content");
    let html = decode_form_content(body)?;

    let converter = TableConverter::new(state.config.convert_options());
    let csv = converter.convert(&html)?;
    info!(bytes = csv.len(), "Conversion completed");

    if accepts_csv(&headers) {
        Ok(([(header::CONTENT_TYPE, CSV_CONTENT_TYPE)], csv).into_response())
    } else {
        Ok(Json(csv).into_response())
    }
}

fn accepts_csv(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("text/csv"))
}
