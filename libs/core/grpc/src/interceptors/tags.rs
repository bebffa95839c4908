use std::net::SocketAddr;
use tonic::{Request, Status};

use super::auth::Identity;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Structured call metadata for telemetry. No business effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTags {
    pub request_id: String,
    pub user_id: Option<String>,
    pub peer: Option<SocketAddr>,
}

/// Stage 2: attach [`RequestTags`] to the call.
///
/// Reuses an inbound `x-request-id` (the gateway forwards its own) and mints a
/// UUID otherwise, writing it back into the metadata so handlers see the same id.
#[derive(Clone, Debug, Default)]
pub struct TagsInterceptor;

impl TagsInterceptor {
    pub fn new() -> Self {
        Self
    }
}

impl tonic::service::Interceptor for TagsInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let inbound = request
            .metadata()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_owned);

        let request_id = match inbound {
            Some(id) => id,
            None => {
                let id = uuid::Uuid::new_v4().to_string();
                if let Ok(value) = id.parse() {
                    request.metadata_mut().insert(REQUEST_ID_HEADER, value);
                }
                id
            }
        };

        let tags = RequestTags {
            request_id,
            user_id: request.extensions().get::<Identity>().map(|identity| identity.user_id.clone()),
            peer: request.remote_addr(),
        };
        request.extensions_mut().insert(tags);

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    #[test]
    fn test_generates_request_id() {
        let request = TagsInterceptor::new().call(Request::new(())).unwrap();
        let tags = request.extensions().get::<RequestTags>().unwrap();

        assert!(uuid::Uuid::parse_str(&tags.request_id).is_ok());
        assert_eq!(request.metadata().get(REQUEST_ID_HEADER).unwrap(), tags.request_id.as_str());
        assert_eq!(tags.user_id, None);
        assert_eq!(tags.peer, None);
    }

    #[test]
    fn test_keeps_inbound_request_id_and_identity() {
        let mut request = Request::new(());
        request.metadata_mut().insert(REQUEST_ID_HEADER, "req-42".parse().unwrap());
        request.extensions_mut().insert(Identity::new("user1"));

        let request = TagsInterceptor::new().call(request).unwrap();
        let tags = request.extensions().get::<RequestTags>().unwrap();

        assert_eq!(tags.request_id, "req-42");
        assert_eq!(tags.user_id.as_deref(), Some("user1"));
    }
}
