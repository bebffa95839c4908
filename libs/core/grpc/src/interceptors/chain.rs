use std::sync::Arc;
use tonic::service::interceptor::InterceptedService;

use super::auth::{AuthInterceptor, TokenVerifier};
use super::compose::{ComposedInterceptor, compose_interceptors};
use super::tags::TagsInterceptor;
use super::telemetry::{FailureReporter, FailureTelemetry, TracingReporter};

/// A service behind all three stages.
pub type ProtectedService<S> =
    InterceptedService<FailureTelemetry<S>, ComposedInterceptor<AuthInterceptor, TagsInterceptor>>;

/// A service behind tagging and telemetry only.
pub type PublicService<S> = InterceptedService<FailureTelemetry<S>, TagsInterceptor>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Authentication,
    Tagging,
    FailureTelemetry,
}

impl Stage {
    /// Only authentication may answer a call without running the handler.
    pub fn may_short_circuit(self) -> bool {
        matches!(self, Stage::Authentication)
    }
}

/// The ordered middleware every inbound RPC passes through.
///
/// Authentication and tagging run as tonic interceptors on the request; the
/// telemetry stage wraps the service itself so it sees the outcome. A call
/// rejected by authentication therefore never reaches tagging, telemetry or
/// the handler.
///
/// ```ignore
/// let chain = InterceptorChain::new(verifier);
/// Server::builder()
///     .add_service(chain.protect(TodoServiceServer::new(todo)))
///     .add_service(chain.public(AuthServiceServer::new(auth)))
/// ```
#[derive(Clone)]
pub struct InterceptorChain {
    auth: AuthInterceptor,
    reporter: Arc<dyn FailureReporter>,
}

impl InterceptorChain {
    pub const STAGES: [Stage; 3] = [Stage::Authentication, Stage::Tagging, Stage::FailureTelemetry];

    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            auth: AuthInterceptor::new(verifier),
            reporter: Arc::new(TracingReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn protect<S>(&self, service: S) -> ProtectedService<S> {
        InterceptedService::new(
            FailureTelemetry::new(service, Arc::clone(&self.reporter)),
            compose_interceptors(self.auth.clone(), TagsInterceptor::new()),
        )
    }

    /// For services that must be reachable without credentials, such as
    /// token verification itself.
    pub fn public<S>(&self, service: S) -> PublicService<S> {
        InterceptedService::new(
            FailureTelemetry::new(service, Arc::clone(&self.reporter)),
            TagsInterceptor::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptors::auth::{AuthError, Identity};
    use crate::interceptors::tags::RequestTags;
    use crate::interceptors::telemetry::tests::RecordingReporter;
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tonic::body::Body;
    use tonic::{Code, Status};
    use tower::ServiceExt;

    fn chain(reporter: Arc<RecordingReporter>) -> InterceptorChain {
        let verifier = |token: &str| match token {
            "valid" => Ok(Identity::new("user1")),
            other => Err(AuthError::InvalidToken(other.to_string())),
        };
        InterceptorChain::new(Arc::new(verifier)).with_reporter(reporter)
    }

    fn request(authorization: Option<&str>) -> http::Request<Body> {
        let mut builder = http::Request::builder().uri("/todo.v1.TodoService/ListProjects");
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }
        builder.body(Body::default()).unwrap()
    }

    fn grpc_code<B>(response: &http::Response<B>) -> Option<Code> {
        Status::from_header_map(response.headers()).map(|status| status.code())
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(
            InterceptorChain::STAGES,
            [Stage::Authentication, Stage::Tagging, Stage::FailureTelemetry]
        );
        let short_circuiting: Vec<_> =
            InterceptorChain::STAGES.into_iter().filter(|stage| stage.may_short_circuit()).collect();
        assert_eq!(short_circuiting, vec![Stage::Authentication]);
    }

    #[tokio::test]
    async fn test_unauthenticated_calls_never_reach_the_handler() {
        let reporter = Arc::new(RecordingReporter::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = {
            let calls = calls.clone();
            tower::service_fn(move |_req: http::Request<Body>| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, Infallible>(http::Response::new(Body::default())) }
            })
        };
        let service = chain(reporter.clone()).protect(handler);

        for authorization in [None, Some("Bearer nope"), Some("Basic dXNlcjpwYXNz")] {
            let response = service.clone().oneshot(request(authorization)).await.unwrap();
            assert_eq!(grpc_code(&response), Some(Code::Unauthenticated));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(reporter.failures.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_authenticated_calls_carry_identity_and_tags() {
        let reporter = Arc::new(RecordingReporter::default());
        let handler = tower::service_fn(|req: http::Request<Body>| async move {
            let identity = req.extensions().get::<Identity>().cloned();
            let tagged_user = req.extensions().get::<RequestTags>().and_then(|tags| tags.user_id.clone());
            let status = if identity == Some(Identity::new("user1")) && tagged_user.as_deref() == Some("user1") {
                Status::internal("storage offline")
            } else {
                Status::failed_precondition("identity or tags missing")
            };
            Ok::<_, Infallible>(status.into_http::<Body>())
        });

        let response = chain(reporter.clone())
            .protect(handler)
            .oneshot(request(Some("Bearer valid")))
            .await
            .unwrap();

        assert_eq!(grpc_code(&response), Some(Code::Internal));
        let failures = reporter.failures.lock().unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message, "storage offline");
        assert!(!failures[0].panicked);
        assert_eq!(failures[0].tags.as_ref().and_then(|tags| tags.user_id.as_deref()), Some("user1"));
    }

    #[tokio::test]
    async fn test_public_services_skip_authentication() {
        let reporter = Arc::new(RecordingReporter::default());
        let handler = tower::service_fn(|req: http::Request<Body>| async move {
            assert!(req.extensions().get::<RequestTags>().is_some());
            assert!(req.extensions().get::<Identity>().is_none());
            Ok::<_, Infallible>(http::Response::new(Body::default()))
        });

        let response = chain(reporter).public(handler).oneshot(request(None)).await.unwrap();
        assert_eq!(grpc_code(&response), None);
    }
}
