use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;
use tonic::{Code, Status};
use tower::Service;
use tracing::Instrument;

use super::tags::RequestTags;

/// One call that ended in a code worth an operator's attention.
#[derive(Clone, Debug)]
pub struct CallFailure {
    /// `/package.Service/Method`
    pub method: String,
    pub code: Code,
    pub message: String,
    pub tags: Option<RequestTags>,
    pub panicked: bool,
}

/// Sink for unexpected failures, e.g. an error-tracking service.
#[async_trait]
pub trait FailureReporter: Send + Sync + 'static {
    async fn report(&self, failure: &CallFailure);
}

/// Default reporter: one `error` event per failure.
#[derive(Clone, Debug, Default)]
pub struct TracingReporter;

#[async_trait]
impl FailureReporter for TracingReporter {
    async fn report(&self, failure: &CallFailure) {
        tracing::error!(
            method = %failure.method,
            code = ?failure.code,
            request_id = failure.tags.as_ref().map(|tags| tags.request_id.as_str()),
            user_id = failure.tags.as_ref().and_then(|tags| tags.user_id.as_deref()),
            panicked = failure.panicked,
            message = %failure.message,
            "gRPC call failed unexpectedly"
        );
    }
}

/// Codes that indicate a server-side fault rather than a caller mistake.
pub fn is_unexpected(code: Code) -> bool {
    matches!(code, Code::Unknown | Code::Internal | Code::DataLoss | Code::Unavailable)
}

/// Stage 3: observe the outcome of each call and report unexpected failures.
///
/// Errors from unary handlers are sent trailers-only, so the status is read
/// from the response headers. The response is returned untouched, except that
/// a panicking handler is turned into `INTERNAL`.
#[derive(Clone)]
pub struct FailureTelemetry<S> {
    inner: S,
    reporter: Arc<dyn FailureReporter>,
}

impl<S> FailureTelemetry<S> {
    pub fn new(inner: S, reporter: Arc<dyn FailureReporter>) -> Self {
        Self { inner, reporter }
    }
}

impl<S, ReqBody, ResBody> Service<http::Request<ReqBody>> for FailureTelemetry<S>
where
    S: Service<http::Request<ReqBody>, Response = http::Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ReqBody: Send + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = http::Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: http::Request<ReqBody>) -> Self::Future {
        // The readied service handles this call; the clone takes the next one
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let reporter = Arc::clone(&self.reporter);

        let method = request.uri().path().to_owned();
        let tags = request.extensions().get::<RequestTags>().cloned();
        let span = tracing::info_span!(
            "grpc.call",
            method = %method,
            request_id = tags.as_ref().map(|tags| tags.request_id.as_str()),
            user_id = tags.as_ref().and_then(|tags| tags.user_id.as_deref()),
        );

        let call = async move {
            let started = Instant::now();
            let outcome = AssertUnwindSafe(inner.call(request)).catch_unwind().await;

            let (response, failure) = match outcome {
                Ok(Ok(response)) => {
                    let failure = Status::from_header_map(response.headers())
                        .filter(|status| is_unexpected(status.code()))
                        .map(|status| CallFailure {
                            method: method.clone(),
                            code: status.code(),
                            message: status.message().to_owned(),
                            tags: tags.clone(),
                            panicked: false,
                        });
                    (response, failure)
                }
                Ok(Err(err)) => return Err(err),
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    let failure = CallFailure {
                        method: method.clone(),
                        code: Code::Internal,
                        message,
                        tags: tags.clone(),
                        panicked: true,
                    };
                    (Status::internal("Internal server error").into_http(), Some(failure))
                }
            };

            tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "gRPC call finished");
            if let Some(failure) = failure {
                reporter.report(&failure).await;
            }
            Ok(response)
        };

        call.instrument(span).boxed()
    }
}

impl<S: tonic::server::NamedService> tonic::server::NamedService for FailureTelemetry<S> {
    const NAME: &'static str = S::NAME;
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_owned()
    }
}
