use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use axum_helpers::AppError;
use grpc_client::metadata::request_with_headers;
use rpc::auth::v1::VerifyTokenRequest;

use super::{GatewayState, rpc_error};
use crate::models::{VerifiedIdentity, VerifyTokenBody};

/// Resolve a bearer token to the user it was issued for
#[utoipa::path(
    post,
    path = "/v1/auth/verify",
    tag = "auth",
    request_body = VerifyTokenBody,
    responses(
        (status = 200, description = "Token is valid", body = VerifiedIdentity),
        (status = 401, description = "Token is invalid or expired")
    )
)]
pub async fn verify_token(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
    payload: Result<Json<VerifyTokenBody>, JsonRejection>,
) -> Result<Json<VerifiedIdentity>, AppError> {
    let Json(body) = payload?;

    let response = state
        .auth
        .verify_token(request_with_headers(
            VerifyTokenRequest { token: body.token },
            &headers,
        ))
        .await
        .map_err(rpc_error)?
        .into_inner();

    Ok(Json(VerifiedIdentity {
        user_id: response.user_id,
    }))
}
