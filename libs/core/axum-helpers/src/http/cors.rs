use axum::http::{HeaderName, HeaderValue, Method, header};
use std::time::Duration;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};

#[derive(Debug, Error)]
pub enum CorsError {
    #[error("CORS allow-list is empty")]
    Empty,

    #[error("Invalid CORS origin '{origin}'")]
    InvalidOrigin { origin: String },
}

/// Creates a CORS layer from an allow-list of origins.
///
/// A single `*` entry allows any origin; credentials are then disabled since
/// browsers reject `Access-Control-Allow-Credentials` with a wildcard origin.
/// Any other list is matched exactly and allows credentials.
///
/// Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS.
/// Headers: Content-Type, Authorization, Accept, x-request-id.
/// Max age: 1 hour.
pub fn create_cors_layer(origins: &[String]) -> Result<CorsLayer, CorsError> {
    let origins: Vec<&str> = origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() {
        return Err(CorsError::Empty);
    }

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .max_age(Duration::from_secs(3600));

    if origins.contains(&"*") {
        return Ok(layer.allow_origin(AllowOrigin::any()));
    }

    let allowed = origins
        .into_iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| CorsError::InvalidOrigin {
                    origin: origin.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn app(origins: &[&str]) -> Router {
        let origins: Vec<String> = origins.iter().map(|s| s.to_string()).collect();
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(create_cors_layer(&origins).unwrap())
    }

    fn request_from(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/ping")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed_with_credentials() {
        let response = app(&["http://localhost:3000", "https://example.com"])
            .oneshot(request_from("https://example.com"))
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://example.com"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_allow_header() {
        let response = app(&["http://localhost:3000"])
            .oneshot(request_from("https://evil.example"))
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let response = app(&["*"])
            .oneshot(request_from("https://anywhere.example"))
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(matches!(
            create_cors_layer(&[" ".to_string()]),
            Err(CorsError::Empty)
        ));
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let err = create_cors_layer(&["http://bad\norigin".to_string()]).unwrap_err();
        assert!(matches!(err, CorsError::InvalidOrigin { .. }));
    }
}
