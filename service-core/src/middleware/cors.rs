use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

/// Fixed cross-origin response headers.
///
/// Browser clients call these services from a different origin, so every
/// response (including errors and preflights) must carry the same CORS
/// headers. Applying them in middleware keeps individual handlers out of
/// the loop.
pub async fn cors_headers_middleware(req: Request, next: Next) -> impl IntoResponse {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        header::HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        header::HeaderValue::from_static(
            "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
        ),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        header::HeaderValue::from_static("OPTIONS,POST"),
    );

    // Bodyless responses (preflight) still advertise the JSON content type
    // so the envelope contract holds on every path.
    if !headers.contains_key(header::CONTENT_TYPE) {
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
    }

    response
}
