use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer from the environment.
///
/// - `ENABLE_CORS`: `"false"` turns CORS off (default `"true"`).
/// - `CORS_ALLOWED_ORIGINS`: `*` or a comma-separated origin list (default `*`).
pub fn create_cors_layer() -> Option<CorsLayer> {
    let enabled = std::env::var("ENABLE_CORS")
        .map(|v| !v.eq_ignore_ascii_case("false"))
        .unwrap_or(true);
    let origins = std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

    cors_layer_for(enabled, &origins)
}

pub fn cors_layer_for(enabled: bool, origins: &str) -> Option<CorsLayer> {
    if !enabled {
        tracing::info!("CORS disabled");
        return None;
    }

    if origins.trim() == "*" {
        tracing::info!("CORS enabled for all origins");
        return Some(CorsLayer::permissive());
    }

    let allowed = parse_origins(origins);
    if allowed.is_empty() {
        tracing::warn!("No usable origin in CORS_ALLOWED_ORIGINS={:?}, CORS disabled", origins);
        return None;
    }

    tracing::info!("CORS enabled for {} origin(s)", allowed.len());
    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

/// Unparseable entries are logged and skipped.
pub fn parse_origins(origins: &str) -> Vec<HeaderValue> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {:?}", origin);
                None
            }
        })
        .collect()
}
