//! HTTP header → gRPC metadata forwarding for the gateway

use http::HeaderMap;
use tonic::metadata::{AsciiMetadataValue, MetadataMap};

/// Headers copied verbatim from an inbound HTTP request into RPC metadata.
pub const FORWARDED_HEADERS: [&str; 2] = ["authorization", "x-request-id"];

/// Wrap `message` in a request carrying the forwarded headers.
///
/// Values that are not valid ASCII metadata are dropped; a missing
/// `authorization` then surfaces as `UNAUTHENTICATED` from the server.
pub fn request_with_headers<T>(message: T, headers: &HeaderMap) -> tonic::Request<T> {
  let mut request = tonic::Request::new(message);
  copy_headers(headers, request.metadata_mut());
  request
}

pub fn copy_headers(headers: &HeaderMap, metadata: &mut MetadataMap) {
  for name in FORWARDED_HEADERS {
    let value = headers
      .get(name)
      .and_then(|value| value.to_str().ok())
      .and_then(|value| value.parse::<AsciiMetadataValue>().ok());

    if let Some(value) = value {
      metadata.insert(name, value);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use http::HeaderValue;

  #[test]
  fn test_forwards_auth_and_request_id_only() {
    let mut headers = HeaderMap::new();
    headers.insert("authorization", HeaderValue::from_static("Bearer abc"));
    headers.insert("x-request-id", HeaderValue::from_static("req-1"));
    headers.insert("cookie", HeaderValue::from_static("session=1"));

    let request = request_with_headers((), &headers);
    let metadata = request.metadata();

    assert_eq!(metadata.get("authorization").unwrap(), "Bearer abc");
    assert_eq!(metadata.get("x-request-id").unwrap(), "req-1");
    assert!(metadata.get("cookie").is_none());
  }

  #[test]
  fn test_missing_headers_are_skipped() {
    let request = request_with_headers("payload", &HeaderMap::new());
    assert!(request.metadata().is_empty());
    assert_eq!(request.into_inner(), "payload");
  }
}
