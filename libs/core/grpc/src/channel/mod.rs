pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Build a channel that connects on the first RPC.
///
/// The HTTP gateway uses this to reach the RPC listener of its own process,
/// which may not be accepting yet when the router is assembled.
pub fn create_channel_lazy(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_lazy_with_config(addr, ChannelConfig::loopback())
}

pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let endpoint = endpoint(&addr, config)?;

  tracing::debug!(target: "grpc_client", addr = %addr, "Creating lazy gRPC channel");

  Ok(endpoint.connect_lazy())
}

fn endpoint(addr: &str, config: ChannelConfig) -> GrpcResult<Endpoint> {
  let endpoint = Endpoint::from_shared(addr.to_owned()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %addr, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  Ok(config.apply_to_endpoint(endpoint))
}
