use std::sync::Arc;

use grpc_client::TokenVerifier;
use rpc::auth::v1::{VerifyTokenRequest, VerifyTokenResponse, auth_service_server::AuthService};
use tonic::{Request, Response, Status};

/// `auth.v1.AuthService`: answers "who holds this token".
///
/// Served without the authentication stage, since the token under test is the
/// payload rather than the caller's credential.
pub struct AuthServiceImpl {
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthServiceImpl {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }
}

#[tonic::async_trait]
impl AuthService for AuthServiceImpl {
    async fn verify_token(
        &self,
        request: Request<VerifyTokenRequest>,
    ) -> Result<Response<VerifyTokenResponse>, Status> {
        let token = request.into_inner().token;
        if token.trim().is_empty() {
            return Err(Status::unauthenticated("Missing bearer token"));
        }

        let identity = self.verifier.verify(token.trim())?;

        Ok(Response::new(VerifyTokenResponse {
            user_id: identity.user_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grpc_client::Identity;
    use grpc_client::interceptors::AuthError;
    use tonic::Code;

    fn service() -> AuthServiceImpl {
        AuthServiceImpl::new(Arc::new(|token: &str| match token {
            "good" => Ok(Identity::new("user1")),
            other => Err(AuthError::InvalidToken(format!("unknown token {other}"))),
        }))
    }

    #[tokio::test]
    async fn test_valid_token_resolves_user() {
        let response = service()
            .verify_token(Request::new(VerifyTokenRequest {
                token: " good ".into(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.user_id, "user1");
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthenticated() {
        let status = service()
            .verify_token(Request::new(VerifyTokenRequest {
                token: "forged".into(),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::Unauthenticated);
    }

    #[tokio::test]
    async fn test_empty_token_is_unauthenticated() {
        let status = service()
            .verify_token(Request::new(VerifyTokenRequest::default()))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::Unauthenticated);
    }
}
