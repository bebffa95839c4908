use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tonic::metadata::MetadataMap;
use tonic::{Request, Status};

/// Caller resolved by the authentication stage.
///
/// Stored in the request extensions; handlers read it with [`Identity::from_request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
}

impl Identity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }

    pub fn from_request<T>(request: &Request<T>) -> Result<&Identity, Status> {
        request
            .extensions()
            .get::<Identity>()
            .ok_or_else(|| Status::unauthenticated("Request is not authenticated"))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Malformed authorization header")]
    MalformedHeader,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        Status::unauthenticated(err.to_string())
    }
}

/// Verification capability consumed by the authentication stage.
///
/// Token issuance lives elsewhere; this only answers "who is this".
pub trait TokenVerifier: Send + Sync + 'static {
    fn verify(&self, token: &str) -> AuthResult<Identity>;
}

impl<F> TokenVerifier for F
where
    F: Fn(&str) -> AuthResult<Identity> + Send + Sync + 'static,
{
    fn verify(&self, token: &str) -> AuthResult<Identity> {
        self(token)
    }
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

/// HS256 JWT verifier. `sub` becomes the user id; `exp` is mandatory.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> AuthResult<Identity> {
        let data = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.sub.trim().is_empty() {
            return Err(AuthError::InvalidToken("empty subject".to_string()));
        }
        Ok(Identity::new(data.claims.sub))
    }
}

/// Extract the token from `authorization: Bearer <token>`.
pub fn bearer_token(metadata: &MetadataMap) -> AuthResult<&str> {
    let header = metadata.get("authorization").ok_or(AuthError::MissingToken)?;
    let header = header.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let (scheme, token) = header.split_once(' ').ok_or(AuthError::MalformedHeader)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedHeader);
    }

    match token.trim() {
        "" => Err(AuthError::MissingToken),
        token => Ok(token),
    }
}

/// Stage 1: reject unauthenticated calls before anything else runs.
#[derive(Clone)]
pub struct AuthInterceptor {
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthInterceptor {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl std::fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInterceptor").finish_non_exhaustive()
    }
}

impl tonic::service::Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let identity = bearer_token(request.metadata())
            .and_then(|token| self.verifier.verify(token))
            .inspect_err(|e| tracing::debug!(error = %e, "Rejected unauthenticated call"))?;

        request.extensions_mut().insert(identity);
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;
    use tonic::service::Interceptor;

    const SECRET: &[u8] = b"test-secret";

    #[derive(Serialize)]
    struct TestClaims<'a> {
        sub: &'a str,
        exp: u64,
    }

    fn token(sub: &str, exp: u64) -> String {
        encode(&Header::default(), &TestClaims { sub, exp }, &EncodingKey::from_secret(SECRET)).unwrap()
    }

    fn in_an_hour() -> u64 {
        jsonwebtoken::get_current_timestamp() + 3600
    }

    fn with_auth(value: &str) -> Request<()> {
        let mut request = Request::new(());
        request.metadata_mut().insert("authorization", value.parse().unwrap());
        request
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(with_auth("Bearer abc").metadata()), Ok("abc"));
        assert_eq!(bearer_token(with_auth("bearer abc").metadata()), Ok("abc"));
        assert_eq!(bearer_token(with_auth("Basic abc").metadata()), Err(AuthError::MalformedHeader));
        assert_eq!(bearer_token(with_auth("Bearer ").metadata()), Err(AuthError::MissingToken));
        assert_eq!(bearer_token(Request::new(()).metadata()), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_jwt_verifier_accepts_valid_token() {
        let verifier = JwtVerifier::hs256(SECRET);
        let identity = verifier.verify(&token("user1", in_an_hour())).unwrap();
        assert_eq!(identity, Identity::new("user1"));
    }

    #[test]
    fn test_jwt_verifier_rejects_expired_and_foreign_tokens() {
        let verifier = JwtVerifier::hs256(SECRET);
        assert!(matches!(verifier.verify(&token("user1", 1)), Err(AuthError::InvalidToken(_))));

        let other = JwtVerifier::hs256(b"another-secret");
        assert!(matches!(other.verify(&token("user1", in_an_hour())), Err(AuthError::InvalidToken(_))));

        assert!(matches!(verifier.verify(&token(" ", in_an_hour())), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_interceptor_inserts_identity() {
        let mut auth = AuthInterceptor::new(Arc::new(JwtVerifier::hs256(SECRET)));
        let request = auth
            .call(with_auth(&format!("Bearer {}", token("user1", in_an_hour()))))
            .unwrap();

        assert_eq!(Identity::from_request(&request).unwrap().user_id, "user1");
    }

    #[test]
    fn test_interceptor_rejects_missing_credentials() {
        let mut auth = AuthInterceptor::new(Arc::new(|_: &str| -> AuthResult<Identity> { Ok(Identity::new("never")) }));
        let status = auth.call(Request::new(())).unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
    }

    #[test]
    fn test_identity_missing_is_unauthenticated() {
        let status = Identity::from_request(&Request::new(())).unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
    }
}
