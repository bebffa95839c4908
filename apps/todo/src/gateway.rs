//! HTTP/JSON gateway in front of the RPC listener

use axum::Router;
use axum::http::HeaderName;
use axum_helpers::errors::handlers::not_found;
use axum_helpers::{CorsError, create_cors_layer};
use domain_todo::GatewayState;
use domain_todo::handlers;
use grpc_client::interceptors::REQUEST_ID_HEADER;
use tonic::transport::Channel;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Gateway routes with CORS, request ids and HTTP tracing applied to every
/// response, unknown routes included.
///
/// The request id is set before the handler runs, so it is forwarded to the
/// RPC call and shows up in both servers' logs.
pub fn router(channel: Channel, cors_origins: &[String]) -> Result<Router, CorsError> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Ok(handlers::router(GatewayState::new(channel))
        .fallback(not_found)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(create_cors_layer(cors_origins)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn gateway(origins: &[&str]) -> Router {
        let channel = grpc_client::create_channel_lazy("http://127.0.0.1:1").unwrap();
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        router(channel, &origins).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = gateway(&["*"])
            .oneshot(Request::builder().uri("/v2/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_preflight_from_allowed_origin() {
        let response = gateway(&["https://app.example.com"])
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/v1/items")
                    .header(header::ORIGIN, "https://app.example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://app.example.com"
        );
    }

    #[tokio::test]
    async fn test_error_responses_carry_cors_headers() {
        let response = gateway(&["https://app.example.com"])
            .oneshot(
                Request::builder()
                    .uri("/v2/nothing")
                    .header(header::ORIGIN, "https://app.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn test_request_id_is_generated_and_echoed() {
        let response = gateway(&["*"])
            .oneshot(Request::builder().uri("/v2/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let response = gateway(&["*"])
            .oneshot(
                Request::builder()
                    .uri("/v2/nothing")
                    .header(REQUEST_ID_HEADER, "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
    }

    #[tokio::test]
    async fn test_empty_allow_list_is_rejected() {
        let channel = grpc_client::create_channel_lazy("http://127.0.0.1:1").unwrap();
        assert!(matches!(router(channel, &[]), Err(CorsError::Empty)));
    }
}
