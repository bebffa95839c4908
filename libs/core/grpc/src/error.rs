use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors raised while building channels or binding listeners
#[derive(Error, Debug)]
pub enum GrpcError {
  #[error("Invalid URI: {0}")]
  InvalidUri(#[from] tonic::transport::Error),

  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    tonic::Status::invalid_argument(err.to_string())
  }
}

/// Turn a validation message into a `tonic::Status`.
///
/// # Example
/// ```ignore
/// use grpc_client::error::ToTonicResult;
///
/// let title = non_empty(&req.title).to_tonic()?;
/// ```
pub trait ToTonicResult<T> {
  /// `INVALID_ARGUMENT` with the message as-is
  fn to_tonic(self) -> Result<T, tonic::Status>;

  fn to_tonic_with_code(self, code: tonic::Code) -> Result<T, tonic::Status>;
}

impl<T> ToTonicResult<T> for Result<T, String> {
  fn to_tonic(self) -> Result<T, tonic::Status> {
    self.map_err(tonic::Status::invalid_argument)
  }

  fn to_tonic_with_code(self, code: tonic::Code) -> Result<T, tonic::Status> {
    self.map_err(|e| tonic::Status::new(code, e))
  }
}

/// Turn a missing value into a `tonic::Status`.
pub trait ToTonicOption<T> {
  fn ok_or_not_found(self, message: impl Into<String>) -> Result<T, tonic::Status>;

  fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status>;

  /// For response fields the server always sets; absence means a broken peer.
  fn ok_or_internal(self, message: impl Into<String>) -> Result<T, tonic::Status>;
}

impl<T> ToTonicOption<T> for Option<T> {
  fn ok_or_not_found(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::not_found(message.into()))
  }

  fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::invalid_argument(message.into()))
  }

  fn ok_or_internal(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::internal(message.into()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_result_to_tonic() {
    let err = Err::<(), _>("title must not be empty".to_string()).to_tonic().unwrap_err();
    assert_eq!(err.code(), tonic::Code::InvalidArgument);
    assert_eq!(err.message(), "title must not be empty");

    let err = Err::<(), _>("gone".to_string())
      .to_tonic_with_code(tonic::Code::NotFound)
      .unwrap_err();
    assert_eq!(err.code(), tonic::Code::NotFound);
  }

  #[test]
  fn test_option_to_tonic() {
    assert_eq!(Some(1).ok_or_not_found("missing").unwrap(), 1);
    assert_eq!(None::<u8>.ok_or_not_found("missing").unwrap_err().code(), tonic::Code::NotFound);
    assert_eq!(None::<u8>.ok_or_invalid("missing").unwrap_err().code(), tonic::Code::InvalidArgument);
    assert_eq!(None::<u8>.ok_or_internal("missing").unwrap_err().code(), tonic::Code::Internal);
  }

  #[test]
  fn test_config_error_maps_to_invalid_argument() {
    let status: tonic::Status = GrpcError::InvalidConfig("port".into()).into();
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
  }
}
