//! Interceptor Chain: authentication → tagging → failure telemetry

pub use tonic::service::Interceptor;

pub mod auth;
pub mod chain;
pub mod compose;
pub mod tags;
pub mod telemetry;

pub use auth::{AuthError, AuthInterceptor, AuthResult, Identity, JwtVerifier, TokenVerifier, bearer_token};
pub use chain::{InterceptorChain, ProtectedService, PublicService, Stage};
pub use compose::{ComposedInterceptor, compose_interceptors};
pub use tags::{REQUEST_ID_HEADER, RequestTags, TagsInterceptor};
pub use telemetry::{CallFailure, FailureReporter, FailureTelemetry, TracingReporter, is_unexpected};
