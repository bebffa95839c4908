use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_helpers::AppError;
use grpc_client::metadata::request_with_headers;
use rpc::todo::v1 as proto;

use super::{GatewayState, rpc_error};
use crate::conversions::{projects_from_proto, required};
use crate::models::{CreateProjectBody, Project, ProjectInfo, ProjectList, UpdateProjectBody};

/// Create a project owned by the caller
#[utoipa::path(
    post,
    path = "/v1/projects",
    tag = "projects",
    request_body = CreateProjectBody,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Invalid id or missing name", body = axum_helpers::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 409, description = "Project id already exists")
    ),
    security(("bearer" = []))
)]
pub async fn create_project(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
    payload: Result<Json<CreateProjectBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;
    let message = proto::CreateProjectRequest {
        id: body.id,
        name: body.name,
    };

    let response = state
        .todo
        .create_project(request_with_headers(message, &headers))
        .await
        .map_err(rpc_error)?
        .into_inner();

    let project = Project::try_from(required(response.project, "project")?)?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Projects owned by the caller
#[utoipa::path(
    get,
    path = "/v1/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Caller's projects", body = ProjectList),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer" = []))
)]
pub async fn list_projects(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
) -> Result<Json<ProjectList>, AppError> {
    let response = state
        .todo
        .list_projects(request_with_headers(proto::ListProjectsRequest {}, &headers))
        .await
        .map_err(rpc_error)?
        .into_inner();

    Ok(Json(ProjectList {
        projects: projects_from_proto(response.projects)?,
    }))
}

/// A project with its items
#[utoipa::path(
    get,
    path = "/v1/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project and its items", body = ProjectInfo),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Project not found")
    ),
    security(("bearer" = []))
)]
pub async fn get_project(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<ProjectInfo>, AppError> {
    let response = state
        .todo
        .get_project(request_with_headers(proto::GetProjectRequest { id }, &headers))
        .await
        .map_err(rpc_error)?
        .into_inner();

    Ok(Json(ProjectInfo::try_from(response)?))
}

/// Rename a project
#[utoipa::path(
    put,
    path = "/v1/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    request_body = UpdateProjectBody,
    responses(
        (status = 200, description = "Project renamed", body = Project),
        (status = 400, description = "Malformed id or empty name"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Project not found")
    ),
    security(("bearer" = []))
)]
pub async fn update_project(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProjectBody>, JsonRejection>,
) -> Result<Json<Project>, AppError> {
    let Json(body) = payload?;
    let message = proto::UpdateProjectRequest {
        id,
        name: body.name,
    };

    let response = state
        .todo
        .update_project(request_with_headers(message, &headers))
        .await
        .map_err(rpc_error)?
        .into_inner();

    Ok(Json(Project::try_from(required(response.project, "project")?)?))
}

/// Delete a project; its items are kept and detached
#[utoipa::path(
    delete,
    path = "/v1/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Project not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete_project(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .todo
        .delete_project(request_with_headers(
            proto::DeleteProjectRequest { id },
            &headers,
        ))
        .await
        .map_err(rpc_error)?;

    Ok(StatusCode::NO_CONTENT)
}
