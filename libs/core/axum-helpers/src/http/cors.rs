use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// CORS for the given list of origins, with the shop's methods and headers.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Allows any origin. Only meant for local development.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Build the CORS layer from configured origins.
///
/// An empty list falls back to [`create_permissive_cors_layer`] with a warning.
pub fn cors_layer_from_origins(origins: &[String]) -> io::Result<CorsLayer> {
    if origins.is_empty() {
        warn!("CORS_ALLOWED_ORIGIN is not set, allowing any origin");
        return Ok(create_permissive_cors_layer());
    }

    let values = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    info!(origins = ?origins, "CORS configured");
    Ok(create_cors_layer(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_origins_fall_back_to_permissive() {
        assert!(cors_layer_from_origins(&[]).is_ok());
    }

    #[test]
    fn test_valid_origins_are_accepted() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://shop.example.com".to_string(),
        ];
        assert!(cors_layer_from_origins(&origins).is_ok());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let origins = vec!["http://bad\norigin".to_string()];
        let err = cors_layer_from_origins(&origins).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
