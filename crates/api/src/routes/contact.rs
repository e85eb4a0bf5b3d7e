use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::map_response,
    routing::post,
    Json, Router,
};
use codeious_site_core::contact::{submit_contact, ContactSubmission};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::middleware::client_meta::ClientMeta;
use crate::middleware::cors::allow_any_origin;
use crate::state::AppState;

const THANK_YOU_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Contact form intake.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/contact", post(submit).options(preflight))
        .layer(map_response(allow_any_origin))
}

async fn submit(
    State(state): State<AppState>,
    ClientMeta(meta): ClientMeta,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(submission) = payload?;
    let receipt = submit_contact(state.cms(), submission, meta).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": THANK_YOU_MESSAGE,
            "id": receipt.id,
        })),
    ))
}

async fn preflight() -> (StatusCode, [(HeaderName, HeaderValue); 2]) {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST, OPTIONS")),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type")),
        ],
    )
}
