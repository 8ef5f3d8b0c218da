//! CORS Middleware Configuration

use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsSettings;

/// Methods used by the room API
const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

/// Create CORS layer from settings
///
/// An empty origin list allows any origin, which is what browser chat clients
/// served from arbitrary hosts expect.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins = parse_origins(&settings.allowed_origins);

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("user")])
        .max_age(Duration::from_secs(3600))
}

fn parse_origins(raw: &[String]) -> Vec<HeaderValue> {
    raw.iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_invalid() {
        let origins = parse_origins(&[
            "http://localhost:3000".to_string(),
            "bad\norigin".to_string(),
        ]);
        assert_eq!(origins, vec![HeaderValue::from_static("http://localhost:3000")]);
    }
}
