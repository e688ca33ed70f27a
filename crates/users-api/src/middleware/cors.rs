use axum::http::{Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build a CORS layer from the configured allowed origins.
///
/// An empty origin list yields a permissive layer, intended for local
/// development only. Otherwise the layer allows exactly the listed origins
/// with GET/OPTIONS (the only methods this API serves) and standard headers.
pub fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|s| s.parse::<axum::http::HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
