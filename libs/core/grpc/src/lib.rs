//! # gRPC plumbing for the todo services
//!
//! - **Interceptor Chain**: bearer authentication, request tagging and failure
//!   telemetry wrapped around every service ([`interceptors::InterceptorChain`])
//! - **Channels**: tuned HTTP/2 channels for in-process clients such as the
//!   HTTP gateway
//! - **Server helpers**: listener config and health reporting
//! - **Conversions / metadata**: id parsing and header forwarding at the wire edge
//!
//! ## Server
//! ```ignore
//! use grpc_client::interceptors::{InterceptorChain, JwtVerifier};
//! use rpc::todo::v1::todo_service_server::TodoServiceServer;
//!
//! let chain = InterceptorChain::new(Arc::new(JwtVerifier::hs256(secret.as_bytes())));
//! Server::builder()
//!     .add_service(chain.protect(TodoServiceServer::new(service)))
//!     .serve(addr)
//!     .await?;
//! ```
//!
//! ## Gateway client
//! ```ignore
//! use grpc_client::{create_channel_lazy, metadata::request_with_headers};
//!
//! let channel = create_channel_lazy("http://127.0.0.1:50051")?;
//! let mut client = TodoServiceClient::new(channel);
//! client.get_todo_item(request_with_headers(message, &headers)).await?;
//! ```

pub mod channel;
pub mod conversions;
pub mod error;
pub mod interceptors;
pub mod metadata;
pub mod server;

pub use channel::{ChannelConfig, create_channel_lazy, create_channel_lazy_with_config};
pub use error::{GrpcError, GrpcResult, ToTonicOption, ToTonicResult};

pub use interceptors::{
    AuthInterceptor, ComposedInterceptor, FailureReporter, FailureTelemetry, Identity,
    InterceptorChain, JwtVerifier, RequestTags, TagsInterceptor, TokenVerifier, TracingReporter,
    compose_interceptors,
};
