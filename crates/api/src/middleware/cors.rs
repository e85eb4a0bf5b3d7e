use axum::http::{header, HeaderValue, Method};
use axum::response::Response;
use tower_http::cors::{Any, CorsLayer};

/// CORS for the read-only site API: any origin, GET only.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
}

/// Mark a response readable from any origin. Used on routes that answer
/// their own preflight.
pub async fn allow_any_origin(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}
