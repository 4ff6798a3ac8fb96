//! Cross-origin policy middleware
//!
//! Applies a fixed set of CORS headers to every response and answers
//! `OPTIONS` requests directly with an empty 204 before routing.

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str =
    "Origin, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

/// Middleware applying the cross-origin policy uniformly.
///
/// `OPTIONS` requests short-circuit with 204 and no body; all other
/// responses pass through with the CORS headers attached.
pub async fn apply_cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        set_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    set_cors_headers(response.headers_mut());
    response
}

fn set_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}
